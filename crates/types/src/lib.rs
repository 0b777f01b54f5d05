//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Starting anchor**: (4, 0), where new falling shapes enter the board
//! - **Preview anchor**: (12, 1), where the queued shape waits (off-board)
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Points per cleared line, multiplied by level |
//! | `LEVEL_THRESHOLD` | 1000 | Level `n` ends once score reaches `n * 1000` |
//! | `TICK_LENGTH_LEVEL_ONE_MS` | 600 | Gravity interval at level 1 |
//!
//! # Examples
//!
//! ```
//! use swiftris_types::{Orientation, ShapeKind, GameAction, NUM_COLUMNS, NUM_ROWS};
//!
//! let kind = ShapeKind::from_str("line").unwrap();
//! assert_eq!(kind, ShapeKind::Line);
//!
//! assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
//! assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const NUM_COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const NUM_ROWS: u8 = 20;

/// Anchor column for a shape entering the board
pub const STARTING_COLUMN: i8 = 4;

/// Anchor row for a shape entering the board
pub const STARTING_ROW: i8 = 0;

/// Anchor column of the queued ("next") shape
pub const PREVIEW_COLUMN: i8 = 12;

/// Anchor row of the queued ("next") shape
pub const PREVIEW_ROW: i8 = 1;

/// Points for each cleared line (multiplied by the current level)
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before leveling up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 1000;

/// Gravity interval at level 1 in milliseconds
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Fixed frame interval of the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Number of blocks in every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

/// Block palette
///
/// Colors are assigned independently of the shape kind: any kind may
/// receive any color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// All colors in palette order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Look up a color by palette index (wraps)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Asset-style name of the color ("blue", "orange", ...)
    pub fn sprite_name(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}

/// Rotation states of a shape
///
/// The cycle goes: 0 → 90 → 180 → 270 → 0 (clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// All orientations in clockwise order starting at 0°
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Table index (0..4)
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }

    /// Look up an orientation by index (wraps)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Step one quarter turn, wrapping at both ends
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate(true), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
    /// assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
    /// ```
    pub fn rotate(&self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { 3 };
        Self::from_index(self.index() + step)
    }

    pub fn rotate_cw(&self) -> Self {
        self.rotate(true)
    }

    pub fn rotate_ccw(&self) -> Self {
        self.rotate(false)
    }

    /// Rotation in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// The seven shape kinds
///
/// - **Square**: 2x2 block (O)
/// - **Line**: four in a row (I)
/// - **T**, **L**, **J**, **S**, **Z**: the remaining tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds, in the order used for random selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Look up a kind by index (wraps)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Parse a kind from its name or tetromino letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("I"), Some(ShapeKind::Line));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeKind::Square),
            "line" | "i" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Player actions routed to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the falling shape one column left
    MoveLeft,
    /// Move the falling shape one column right
    MoveRight,
    /// Let the falling shape fall one row right away
    SoftDrop,
    /// Drop the falling shape as far as it can go
    HardDrop,
    /// Rotate the falling shape clockwise
    RotateCw,
    /// Rotate the falling shape counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Start a new game (ends the current one if still running)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
