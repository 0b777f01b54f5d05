//! Game configuration
//!
//! Board dimensions, anchors and scoring constants are carried by a value passed to
//! the engine at construction, so several engines with different rules can coexist
//! (e.g. in parallel tests).
//!
//! # Environment Variables
//!
//! [`GameConfig::from_env`] overrides the defaults from:
//!
//! - `SWIFTRIS_COLUMNS`: board width (default: 10)
//! - `SWIFTRIS_ROWS`: board height (default: 20)
//! - `SWIFTRIS_POINTS_PER_LINE`: points per cleared line (default: 10)
//! - `SWIFTRIS_LEVEL_THRESHOLD`: score per level (default: 1000)
//! - `SWIFTRIS_TICK_MS`: gravity interval at level 1 (default: 600)
//!
//! Values that do not parse are ignored.

use std::fmt;

use crate::types::{
    LEVEL_THRESHOLD, NUM_COLUMNS, NUM_ROWS, POINTS_PER_LINE, PREVIEW_COLUMN, PREVIEW_ROW,
    STARTING_COLUMN, STARTING_ROW, TICK_LENGTH_LEVEL_ONE_MS,
};

/// Largest board side; keeps every anchor + offset inside `i8`
pub const MAX_BOARD_SIDE: u8 = 100;

/// Rules and geometry of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u8,
    pub rows: u8,
    pub starting_column: i8,
    pub starting_row: i8,
    pub preview_column: i8,
    pub preview_row: i8,
    pub points_per_line: u32,
    /// Level `n` is complete once the score reaches `n * level_threshold`
    pub level_threshold: u32,
    pub tick_length_level_one_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            starting_column: STARTING_COLUMN,
            starting_row: STARTING_ROW,
            preview_column: PREVIEW_COLUMN,
            preview_row: PREVIEW_ROW,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
            tick_length_level_one_ms: TICK_LENGTH_LEVEL_ONE_MS,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `SWIFTRIS_*` environment variables
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            columns: parsed("SWIFTRIS_COLUMNS").unwrap_or(defaults.columns),
            rows: parsed("SWIFTRIS_ROWS").unwrap_or(defaults.rows),
            points_per_line: parsed("SWIFTRIS_POINTS_PER_LINE")
                .unwrap_or(defaults.points_per_line),
            level_threshold: parsed("SWIFTRIS_LEVEL_THRESHOLD")
                .unwrap_or(defaults.level_threshold),
            tick_length_level_one_ms: parsed("SWIFTRIS_TICK_MS")
                .unwrap_or(defaults.tick_length_level_one_ms),
            ..defaults
        }
    }

    /// Same rules on a board of a different size
    pub fn with_board(mut self, columns: u8, rows: u8) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Check that the board can hold a shape at the starting anchor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < 4 || self.rows < 4 {
            return Err(ConfigError::BoardTooSmall);
        }
        if self.columns > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge);
        }
        if self.starting_column < 0
            || self.starting_column >= self.columns as i8
            || self.starting_row < 0
            || self.starting_row >= self.rows as i8
        {
            return Err(ConfigError::StartOutsideBoard);
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        if self.tick_length_level_one_ms == 0 {
            return Err(ConfigError::ZeroTickLength);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall,
    BoardTooLarge,
    StartOutsideBoard,
    ZeroLevelThreshold,
    ZeroTickLength,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::BoardTooSmall | ConfigError::BoardTooLarge => "invalid_board",
            ConfigError::StartOutsideBoard => "invalid_anchor",
            ConfigError::ZeroLevelThreshold | ConfigError::ZeroTickLength => "invalid_rules",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::BoardTooSmall => "board must be at least 4x4",
            ConfigError::BoardTooLarge => "board side must not exceed 100 cells",
            ConfigError::StartOutsideBoard => "starting anchor lies outside the board",
            ConfigError::ZeroLevelThreshold => "level threshold must be positive",
            ConfigError::ZeroTickLength => "tick length must be positive",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!((config.columns, config.rows), (10, 20));
        assert_eq!((config.starting_column, config.starting_row), (4, 0));
        assert_eq!((config.preview_column, config.preview_row), (12, 1));
        assert_eq!(config.points_per_line, 10);
        assert_eq!(config.level_threshold, 1000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }

    #[test]
    fn test_validate_rejects_bad_boards() {
        let config = GameConfig::default().with_board(3, 20);
        assert_eq!(config.validate(), Err(ConfigError::BoardTooSmall));

        let config = GameConfig::default().with_board(10, 120);
        assert_eq!(config.validate(), Err(ConfigError::BoardTooLarge));

        let config = GameConfig {
            starting_column: 10,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::StartOutsideBoard));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroLevelThreshold;
        assert_eq!(err.to_string(), "invalid_rules: level threshold must be positive");
    }
}
