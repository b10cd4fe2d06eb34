//! Sequential reference multiplication.
//!
//! The textbook triple loop over a transposed right operand. Slow on big
//! inputs, but deterministic and simple enough to audit, so it serves as the
//! correctness baseline for the threaded engine.

use super::{check_dimensions, dot_product};
use crate::error::Error;
use crate::matrix::Matrix;

/// Multiplies two matrices on the calling thread.
///
/// Fails with [`Error::DimensionMismatch`] unless
/// `left.columns() == right.rows()`. The result has shape
/// `left.rows() × right.columns()` and owns its storage; neither input is
/// touched.
///
/// The right operand is transposed once up front so the inner dot product
/// runs over two contiguous slices instead of striding down a column per
/// cell.
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    check_dimensions(left, right)?;

    let columns = right.transposed();
    let data = (0..left.rows())
        .map(|i| {
            let row = left.row(i);
            (0..right.columns())
                .map(|j| dot_product(row, columns.row(j)))
                .collect()
        })
        .collect();

    Ok(Matrix::from_parts(left.rows(), right.columns(), data))
}
