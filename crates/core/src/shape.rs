//! Shape module - geometry of the seven shapes
//!
//! Each shape kind is defined purely by two static tables:
//! - block offsets: orientation -> 4 (column, row) offsets from the anchor
//! - bottom blocks: orientation -> indices of the blocks that form its resting surface
//!
//! Moving or rotating a shape never checks the board; legality is the engine's job.

use std::fmt;

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::rng::SimpleRng;
use crate::types::{BlockColor, Orientation, ShapeKind, BLOCKS_PER_SHAPE};

/// Offset of a single block relative to the shape anchor
pub type BlockOffset = (i8, i8);

/// Offsets of all 4 blocks for one orientation
pub type ShapeOffsets = [BlockOffset; BLOCKS_PER_SHAPE];

/// Get the block offsets for a shape kind and orientation
pub fn block_offsets(kind: ShapeKind, orientation: Orientation) -> ShapeOffsets {
    match kind {
        ShapeKind::Square => square_offsets(orientation),
        ShapeKind::Line => line_offsets(orientation),
        ShapeKind::T => t_offsets(orientation),
        ShapeKind::L => l_offsets(orientation),
        ShapeKind::J => j_offsets(orientation),
        ShapeKind::S => s_offsets(orientation),
        ShapeKind::Z => z_offsets(orientation),
    }
}

/// Get the indices of the blocks that rest on whatever is below the shape
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    use Orientation::*;

    match (kind, orientation) {
        (ShapeKind::Square, _) => &[2, 3],

        (ShapeKind::Line, Zero | OneEighty) => &[3],
        (ShapeKind::Line, Ninety | TwoSeventy) => &[0, 1, 2, 3],

        (ShapeKind::T, Zero) => &[1, 2, 3],
        (ShapeKind::T, Ninety | TwoSeventy) => &[0, 3],
        (ShapeKind::T, OneEighty) => &[0, 1, 3],

        (ShapeKind::L, Zero) => &[2, 3],
        (ShapeKind::L, Ninety) => &[0, 1, 3],
        (ShapeKind::L, OneEighty) => &[0, 3],
        (ShapeKind::L, TwoSeventy) => &[0, 1, 2],

        (ShapeKind::J, Zero) => &[2, 3],
        (ShapeKind::J, Ninety) => &[0, 1, 2],
        (ShapeKind::J, OneEighty) => &[0, 3],
        (ShapeKind::J, TwoSeventy) => &[0, 1, 3],

        (ShapeKind::S | ShapeKind::Z, Zero | OneEighty) => &[1, 3],
        (ShapeKind::S | ShapeKind::Z, Ninety | TwoSeventy) => &[0, 2, 3],
    }
}

/// Square shapes (same for all orientations)
///
/// ```text
/// | 0•| 1 |
/// | 2 | 3 |
/// ```
fn square_offsets(_orientation: Orientation) -> ShapeOffsets {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// Line shapes, hinged about the second block
fn line_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        // Vertical, anchor on top
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        // Horizontal, anchor on the second block
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

/// T shapes
fn t_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => [(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => [(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

/// L shapes
fn l_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

/// J shapes
fn j_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => [(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

/// S shapes
fn s_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

/// Z shapes
fn z_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// A shape: four same-colored blocks placed around an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    color: BlockColor,
    orientation: Orientation,
    column: i8,
    row: i8,
    blocks: [Block; BLOCKS_PER_SHAPE],
}

impl Shape {
    /// Create a shape with its blocks laid out for `orientation`
    pub fn new(
        kind: ShapeKind,
        column: i8,
        row: i8,
        color: BlockColor,
        orientation: Orientation,
    ) -> Self {
        let blocks = block_offsets(kind, orientation)
            .map(|(dc, dr)| Block::new(column + dc, row + dr, color));
        Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks,
        }
    }

    /// Create a shape of random kind, color and orientation at the given anchor
    pub fn random(column: i8, row: i8, rng: &mut SimpleRng) -> Self {
        let kind = rng.shape_kind();
        let color = rng.block_color();
        let orientation = rng.orientation();
        Self::new(kind, column, row, color, orientation)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn column(&self) -> i8 {
        self.column
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; BLOCKS_PER_SHAPE] {
        &self.blocks
    }

    /// Blocks that form the resting surface at the current orientation
    pub fn bottom_blocks(&self) -> ArrayVec<Block, BLOCKS_PER_SHAPE> {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&idx| self.blocks[idx])
            .collect()
    }

    /// Re-lay the blocks around the (unchanged) anchor for `orientation`
    fn layout_blocks(&mut self, orientation: Orientation) {
        let offsets = block_offsets(self.kind, orientation);
        for (block, (dc, dr)) in self.blocks.iter_mut().zip(offsets) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
    }

    /// Rotate one quarter turn around the anchor
    pub fn rotate(&mut self, clockwise: bool) {
        let orientation = self.orientation.rotate(clockwise);
        self.layout_blocks(orientation);
        self.orientation = orientation;
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(true);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate(false);
    }

    /// Move the anchor and every block by the given delta
    pub fn shift_by(&mut self, columns: i8, rows: i8) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            *block = block.shifted(columns, rows);
        }
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    /// Place the anchor at an absolute position, keeping the orientation
    pub fn move_to(&mut self, column: i8, row: i8) {
        self.column = column;
        self.row = row;
        self.layout_blocks(self.orientation);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} block facing {}: {}, {}, {}, {}",
            self.color,
            self.orientation,
            self.blocks[0],
            self.blocks[1],
            self.blocks[2],
            self.blocks[3]
        )
    }
}
