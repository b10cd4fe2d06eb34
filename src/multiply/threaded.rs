//! Row-block parallel multiplication.
//!
//! The output rows are split into contiguous blocks and each block is filled
//! by its own worker thread. Workers write through exclusive `&mut`
//! sub-slices of the output, disjoint by row, so the buffer needs no lock;
//! the inputs and the column cache are shared immutably. The thread scope is
//! the join barrier: the result is not wrapped into a [`Matrix`] until every
//! worker has finished, and a worker panic resurfaces on the caller only
//! after all the others have been joined.

use std::thread;

use super::{check_dimensions, dot_product};
use crate::error::Error;
use crate::matrix::Matrix;

/// Multiplies two matrices across one worker thread per hardware core.
///
/// Worker count is taken from [`std::thread::available_parallelism`]; see
/// [`multiply_parallel_with`] for the partitioning details.
pub fn multiply_parallel(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    multiply_parallel_with(left, right, workers)
}

/// Same as [`multiply_parallel`] but with an explicit worker cap.
///
/// `num_threads` is a cap, not a promise: the engine never runs more workers
/// than output rows and never fewer than one. Rows are assigned in
/// contiguous blocks of `rows.div_ceil(workers)`, the last block possibly
/// shorter, each row owned by exactly one worker. Every cap from 1 to
/// `rows` yields a result identical to [`crate::multiply`].
///
/// A result with zero rows or zero columns is returned without spawning any
/// thread.
pub fn multiply_parallel_with(
    left: &Matrix,
    right: &Matrix,
    num_threads: usize,
) -> Result<Matrix, Error> {
    check_dimensions(left, right)?;

    let rows = left.rows();
    let width = right.columns();
    let mut data = vec![vec![0i32; width]; rows];

    if rows == 0 || width == 0 {
        return Ok(Matrix::from_parts(rows, width, data));
    }

    let workers = choose_worker_count(rows, num_threads);
    let block = rows.div_ceil(workers);
    let columns = right.transposed();

    thread::scope(|s| {
        for (index, block_rows) in data.chunks_mut(block).enumerate() {
            let start = index * block;
            let columns = &columns;
            s.spawn(move || {
                for (offset, out_row) in block_rows.iter_mut().enumerate() {
                    let row = left.row(start + offset);
                    for (j, cell) in out_row.iter_mut().enumerate() {
                        *cell = dot_product(row, columns.row(j));
                    }
                }
            });
        }
    });

    Ok(Matrix::from_parts(rows, width, data))
}

/// Caps the requested worker count to something the row range can feed.
fn choose_worker_count(rows: usize, requested: usize) -> usize {
    requested.clamp(1, rows)
}
