//! Parallel integer matrix multiplication in Rust, built from scratch.
//!
//! Two strategies over the same wrapping dot product: a sequential
//! reference loop and a threaded engine that fans contiguous blocks of
//! output rows out to short-lived worker threads. Each worker owns a
//! disjoint slice of the output, so the parallel path needs no lock, and
//! both paths are bit-identical even when the arithmetic overflows. That
//! makes the sequential loop the oracle the test suite checks the threaded
//! engine against.
//!
//! ## Usage
//!
//! ```
//! use parmul::{multiply, Matrix};
//!
//! let left = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let right = Matrix::from_rows(vec![vec![2, 0], vec![1, 2]])?;
//!
//! let product = multiply(&left, &right)?;
//! assert_eq!(product.row(0), &[4, 4]);
//! assert_eq!(product.row(1), &[10, 8]);
//! # Ok::<(), parmul::Error>(())
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use parmul::{multiply_parallel, Matrix};
//!
//! let left = Matrix::from_rows(vec![vec![1; 64]; 64])?;
//! let right = Matrix::from_rows(vec![vec![2; 64]; 64])?;
//!
//! let product = multiply_parallel(&left, &right)?;
//! assert_eq!(product.get(0, 0)?, 128);
//! # Ok::<(), parmul::Error>(())
//! ```
//!
//! ## What's inside
//!
//! - A rectangular, immutable-shape `i32` [`Matrix`] with text and file
//!   serialization
//! - A sequential triple-loop baseline over a transposed right operand
//! - A row-block threaded engine with a deterministic ceil partition and a
//!   join barrier before the result becomes visible
//! - A benchmark runner comparing the two strategies across problem sizes

pub mod error;
pub mod matrix;
pub mod multiply;

pub use error::Error;
pub use matrix::Matrix;
pub use multiply::dot_product;
pub use multiply::sequential::multiply;
pub use multiply::threaded::{multiply_parallel, multiply_parallel_with};
