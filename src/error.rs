//! Error types for matrix construction and multiplication.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build a matrix from zero rows")]
    Empty,

    #[error("inconsistent row lengths: row {0} has {1} elements, expected {2}")]
    Ragged(usize, usize, usize),

    #[error("invalid integer {token:?} on line {line}")]
    Parse { line: usize, token: String },

    #[error("matrix dimension mismatch: left is {0}x{1}, right is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
