// src/field.rs

use rayon::prelude::*;

use crate::error::Error;
use crate::grid::Grid2D;
use crate::params::FieldParams;

/// Scalar field defined on a 2D grid, one f64 per cell.
///
/// Immutable once generated: regeneration replaces the whole field
/// rather than mutating cells in place.
#[derive(Debug)]
pub struct ScalarField {
    pub grid: Grid2D,
    pub data: Vec<f64>,
}

impl ScalarField {
    /// Generate the demo field with the default parameters.
    ///
    /// Output is fully deterministic: identical dimensions give
    /// bit-identical data on every call.
    pub fn generate(columns: usize, rows: usize) -> Result<Self, Error> {
        Self::generate_with(&FieldParams::default(), columns, rows)
    }

    /// Generate a field with explicit parameters.
    ///
    /// Zero-sized dimensions yield an empty field. Fails with
    /// `InvalidDimensions` if `columns * rows` is unrepresentable.
    pub fn generate_with(
        params: &FieldParams,
        columns: usize,
        rows: usize,
    ) -> Result<Self, Error> {
        let n = columns
            .checked_mul(rows)
            .ok_or(Error::InvalidDimensions { columns, rows })?;

        let grid = Grid2D::new(columns, rows);
        let mut data = vec![0.0; n];

        // One chunk per row j; rows are independent, so fill them in parallel.
        data.par_chunks_mut(columns.max(1))
            .enumerate()
            .for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate() {
                    *cell = params.value_at(i, j);
                }
            });

        Ok(Self { grid, data })
    }

    /// Get the flat index in `data` for grid indices (i, j).
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        self.grid.idx(i, j)
    }

    /// Field value at cell (i, j).
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.data[self.grid.idx(i, j)]
    }

    /// (min, max) over all finite cell values, or None if the field is
    /// empty or contains no finite value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.data {
            if v.is_finite() {
                if v < lo {
                    lo = v;
                }
                if v > hi {
                    hi = v;
                }
            }
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }
}
