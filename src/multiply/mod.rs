//! Matrix multiplication engines.
//!
//! Two strategies share one dot product and one dimension check: the
//! sequential triple loop in [`sequential`] and the row-block threaded
//! engine in [`threaded`]. Because every cell in both paths comes from the
//! same [`dot_product`] over the same operands in the same order, the two
//! strategies agree bit for bit, wrapping overflow included. The test suite
//! leans on that: the sequential path is the oracle.

pub mod sequential;
pub mod threaded;

use crate::error::Error;
use crate::matrix::Matrix;

/// Dot product of two equal-length integer slices.
///
/// Sums left to right in index order using wrapping i32 arithmetic, matching
/// two's-complement overflow on the host.
pub fn dot_product(a: &[i32], b: &[i32]) -> i32 {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b)
        .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}

/// Rejects incompatible operands before any buffer is allocated.
pub(crate) fn check_dimensions(left: &Matrix, right: &Matrix) -> Result<(), Error> {
    if left.columns() != right.rows() {
        return Err(Error::DimensionMismatch(
            left.rows(),
            left.columns(),
            right.rows(),
            right.columns(),
        ));
    }

    Ok(())
}
