//! Grid module - generic sparse 2D container
//!
//! Backs both the cookie layer and the tile mask of a level.
//! Storage is a flat `Vec<Option<T>>` in row-major order for cache locality.
//! Coordinates: (column, row) where column ranges left to right and
//! row 0 is the bottom of the board.
//! Out-of-range access is a programming error and panics; cells are
//! never silently clamped.

/// A fixed-size `columns x rows` sparse array
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    columns: usize,
    rows: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid2D<T> {
    /// Create an empty grid of the given dimensions
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0 && rows > 0, "grid dimensions must be non-zero");
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize_with(columns * rows, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Calculate flat index from (column, row), asserting bounds
    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.columns && row < self.rows,
            "grid access out of bounds: ({}, {}) on {}x{}",
            column,
            row,
            self.columns,
            self.rows
        );
        row * self.columns + column
    }

    /// Get width of the grid
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get height of the grid
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Borrow the value at (column, row), if any
    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        self.cells[self.index(column, row)].as_ref()
    }

    /// Replace the value at (column, row), returning the previous one
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) -> Option<T> {
        let idx = self.index(column, row);
        std::mem::replace(&mut self.cells[idx], value)
    }

    /// Remove and return the value at (column, row)
    pub fn take(&mut self, column: usize, row: usize) -> Option<T> {
        let idx = self.index(column, row);
        self.cells[idx].take()
    }

    /// Whether the cell at (column, row) holds a value
    pub fn is_occupied(&self, column: usize, row: usize) -> bool {
        self.cells[self.index(column, row)].is_some()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl<T: Copy> Grid2D<T> {
    /// Copy out the value at (column, row), if any
    pub fn get_copied(&self, column: usize, row: usize) -> Option<T> {
        self.cells[self.index(column, row)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid2D<u8> = Grid2D::new(9, 9);
        for row in 0..9 {
            for column in 0..9 {
                assert_eq!(grid.get(column, row), None);
            }
        }
    }

    #[test]
    fn test_set_get_take() {
        let mut grid = Grid2D::new(3, 3);
        assert_eq!(grid.set(1, 2, Some(7u32)), None);
        assert_eq!(grid.get(1, 2), Some(&7));
        assert!(grid.is_occupied(1, 2));
        assert_eq!(grid.set(1, 2, Some(9)), Some(7));
        assert_eq!(grid.take(1, 2), Some(9));
        assert_eq!(grid.get(1, 2), None);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid2D::new(2, 2);
        grid.set(0, 0, Some(1u8));
        grid.set(1, 1, Some(2));
        grid.clear();
        assert!(!grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(1, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_column_out_of_bounds_panics() {
        let grid: Grid2D<u8> = Grid2D::new(3, 3);
        grid.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_out_of_bounds_panics() {
        let grid: Grid2D<u8> = Grid2D::new(3, 3);
        grid.get(0, 3);
    }
}
