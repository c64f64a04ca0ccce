// src/grid.rs

/// Simple 2D cell grid: `columns` cells along x, `rows` cells along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid2D {
    pub columns: usize,
    pub rows: usize,
}

impl Grid2D {
    /// Create a new grid with columns × rows cells.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.columns * self.rows
    }

    /// Convert (i, j) cell indices to a flat index into a 1D array.
    /// `i` is the column index, `j` the row index.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.columns && j < self.rows);
        j * self.columns + i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_indexing_is_consistent() {
        let g = Grid2D::new(4, 3);
        // Check a few indices by hand
        assert_eq!(g.idx(0, 0), 0);
        assert_eq!(g.idx(1, 0), 1);
        assert_eq!(g.idx(0, 1), 4);
        assert_eq!(g.idx(3, 2), 11); // (j=2)*4 + i=3 = 11
        assert_eq!(g.n_cells(), 12);
    }

    #[test]
    fn zero_sized_grids_have_no_cells() {
        assert_eq!(Grid2D::new(0, 7).n_cells(), 0);
        assert_eq!(Grid2D::new(7, 0).n_cells(), 0);
        assert_eq!(Grid2D::new(0, 0).n_cells(), 0);
    }
}
