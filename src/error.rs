// src/error.rs

use thiserror::Error;

/// Errors from field generation and palette construction.
///
/// Both operations are pure and deterministic, so nothing here is
/// transient: any error is a precondition violation by the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested grid cannot be represented as a flat allocation.
    #[error("invalid field dimensions: {columns} x {rows} cells")]
    InvalidDimensions { columns: usize, rows: usize },

    /// Palette step sequence is empty or not sorted ascending by threshold.
    #[error("invalid palette configuration: {0}")]
    InvalidConfiguration(String),
}
