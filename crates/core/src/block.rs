//! Block module - a single colored cell occupant
//!
//! A block belongs either to a shape (while falling or queued) or to the board
//! (after settling). Its position is mutable; its color is fixed.

use std::fmt;

use crate::types::BlockColor;

/// A positioned, colored unit
///
/// Equality and hashing use the full (column, row, color) tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i8,
    pub row: i8,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i8, row: i8, color: BlockColor) -> Self {
        Self { column, row, color }
    }

    pub fn sprite_name(&self) -> &'static str {
        self.color.sprite_name()
    }

    /// Cheap bucket key combining column and row with XOR
    ///
    /// Collides for many distinct positions and ignores color, so it is only a
    /// lookup hint. Use `==`/`Hash` for identity.
    pub fn bucket_key(&self) -> i32 {
        (self.column as i32) ^ (self.row as i32)
    }

    /// Copy of this block moved by the given delta
    pub fn shifted(self, columns: i8, rows: i8) -> Self {
        Self {
            column: self.column + columns,
            row: self.row + rows,
            ..self
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}
