//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine never
//! sees key codes; the runner translates each key press and hands the action to the
//! game loop.

pub mod map;

pub use swiftris_types as types;

pub use map::{handle_key_event, should_quit};
