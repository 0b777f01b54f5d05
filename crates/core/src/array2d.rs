//! Array2D module - fixed-size sparse grid storage
//!
//! The board is a `columns x rows` grid where each cell is either empty or holds one value.
//! Uses a flat vector (row-major) allocated once at construction; it never resizes.
//! Coordinates: (column, row) where column ranges 0..columns (left to right) and row
//! ranges 0..rows (top to bottom).
//!
//! Addressing a cell outside the grid is a caller bug and panics. The engine always
//! bounds-checks with [`Array2D::contains`] before touching the store.

/// Fixed-size 2D store of optional values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Option<T>>,
}

impl<T> Array2D<T> {
    /// Create a new grid with every cell empty
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize_with(columns * rows, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check whether (column, row) addresses a cell of this grid
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            self.contains(column, row),
            "cell ({}, {}) is outside a {}x{} grid",
            column,
            row,
            self.columns,
            self.rows
        );
        row * self.columns + column
    }

    /// Get the value at (column, row)
    ///
    /// Panics if the cell is out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        let idx = self.index(column, row);
        self.cells[idx].as_ref()
    }

    /// Get a mutable reference to the value at (column, row)
    ///
    /// Panics if the cell is out of range.
    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut T> {
        let idx = self.index(column, row);
        self.cells[idx].as_mut()
    }

    /// Store a value (or clear the cell with `None`)
    ///
    /// Panics if the cell is out of range.
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) {
        let idx = self.index(column, row);
        self.cells[idx] = value;
    }

    /// Remove and return the value at (column, row)
    ///
    /// Panics if the cell is out of range.
    pub fn take(&mut self, column: usize, row: usize) -> Option<T> {
        let idx = self.index(column, row);
        self.cells[idx].take()
    }

    /// Check whether (column, row) holds a value
    ///
    /// Panics if the cell is out of range.
    pub fn is_occupied(&self, column: usize, row: usize) -> bool {
        self.get(column, row).is_some()
    }

    /// Iterate one row from left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&T>> {
        let start = self.index(0, row);
        self.cells[start..start + self.columns]
            .iter()
            .map(|cell| cell.as_ref())
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
