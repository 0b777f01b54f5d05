//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of Swiftris: the board, the seven shapes, gravity,
//! settling, line clearing and leveling. It has no dependencies on rendering, input or
//! timing, so it runs the same in the terminal, headless, or under test.
//!
//! # Module Structure
//!
//! - [`array2d`]: fixed-size grid of optional cells backing the board
//! - [`block`]: a single colored cell of a shape or of the board
//! - [`shape`]: static offset tables and the movable [`Shape`]
//! - [`swiftris`]: the rule engine and its game phases
//! - [`events`]: lifecycle notifications and the delegate trait
//! - [`game_loop`]: gravity cadence and reactions to notifications
//! - [`scoring`]: line points, leveling and gravity speed
//! - [`config`]: board size, anchors and scoring constants
//! - [`rng`]: seeded random shape draws
//!
//! # Game Rules
//!
//! - **Board**: 10 columns by 20 rows; row 0 is the top
//! - **Shapes**: random kind, color and orientation, spawned at column 4 row 0
//! - **Movement**: illegal moves and rotations are reverted silently (no wall kicks)
//! - **Scoring**: 10 points per cleared line, multiplied by the level
//! - **Levels**: level `n` is complete at `n * 1000` points
//!
//! # Example
//!
//! ```
//! use swiftris_core::{GameConfig, GameLoop};
//! use swiftris_types::GameAction;
//!
//! let mut game_loop = GameLoop::new(GameConfig::default(), 12345).unwrap();
//! game_loop.start();
//!
//! game_loop.apply(GameAction::MoveRight);
//! game_loop.apply(GameAction::RotateCw);
//! game_loop.apply(GameAction::HardDrop);
//!
//! // The dropped shape landed and the next one is falling.
//! assert_eq!(game_loop.game().board().len(), 4);
//! assert!(game_loop.game().falling_shape().is_some());
//! ```
//!
//! # Timing
//!
//! The engine never looks at a clock. Call [`GameLoop::update`] every frame with the
//! elapsed milliseconds; gravity starts at 600ms per row and speeds up on each level.

pub mod array2d;
pub mod block;
pub mod config;
pub mod events;
pub mod game_loop;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod swiftris;

pub use swiftris_types as types;

// Re-export commonly used types for convenience
pub use array2d::Array2D;
pub use block::Block;
pub use config::{ConfigError, GameConfig};
pub use events::{EventLog, GameEvent, SwiftrisDelegate};
pub use game_loop::GameLoop;
pub use rng::SimpleRng;
pub use scoring::{calculate_line_score, reached_next_level, tick_length_after_level_up};
pub use shape::{block_offsets, bottom_block_indices, Shape};
pub use swiftris::{GamePhase, LineClear, Swiftris};
