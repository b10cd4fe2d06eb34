//! The integer matrix container and its accessors.
//!
//! A [`Matrix`] is rectangular, row-major, and immutable after construction.
//! Multiplication never writes through an existing matrix: both engines
//! build a fresh buffer and wrap it once every cell is final, so a `Matrix`
//! can be read from any number of threads without synchronization.

mod text;

use crate::error::Error;

/// A rectangular `i32` matrix with a fixed shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Vec<i32>>,
}

impl Matrix {
    /// Builds a matrix from a vector of rows, taking ownership of them.
    ///
    /// Fails with [`Error::Empty`] when `data` has no rows (the column count
    /// would be undefined) and with [`Error::Ragged`] when any row's length
    /// differs from the first row's.
    pub fn from_rows(data: Vec<Vec<i32>>) -> Result<Self, Error> {
        let columns = match data.first() {
            Some(first) => first.len(),
            None => return Err(Error::Empty),
        };

        for (index, row) in data.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::Ragged(index, row.len(), columns));
            }
        }

        Ok(Self {
            rows: data.len(),
            columns,
            data,
        })
    }

    /// Wraps a buffer whose shape the caller has already established.
    ///
    /// Unlike [`Matrix::from_rows`] this accepts zero rows, which is how the
    /// multiplication engines represent degenerate results.
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<Vec<i32>>) -> Self {
        debug_assert_eq!(data.len(), rows);
        debug_assert!(data.iter().all(|row| row.len() == columns));

        Self {
            rows,
            columns,
            data,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, column)`, or [`Error::IndexOutOfBounds`].
    pub fn get(&self, row: usize, column: usize) -> Result<i32, Error> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::IndexOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(self.data[row][column])
    }

    /// Borrows row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[i32] {
        assert!(
            row < self.rows,
            "row {} out of bounds for {}x{} matrix",
            row,
            self.rows,
            self.columns
        );
        &self.data[row]
    }

    /// Copies column `column` into a new vector.
    ///
    /// Storage is row-major, so this walks every row: O(rows) per call.
    /// Code that reads columns repeatedly should go through [`Matrix::transposed`]
    /// instead of re-deriving them, which is what both multiplication
    /// engines do.
    ///
    /// # Panics
    ///
    /// Panics if `column >= self.columns()`.
    pub fn column(&self, column: usize) -> Vec<i32> {
        assert!(
            column < self.columns,
            "column {} out of bounds for {}x{} matrix",
            column,
            self.rows,
            self.columns
        );
        self.data.iter().map(|row| row[column]).collect()
    }

    /// Returns the transpose as a new matrix.
    ///
    /// Row `j` of the result is column `j` of `self`, so the transpose acts
    /// as a column cache with contiguous access.
    ///
    /// # Example
    ///
    /// ```
    /// use parmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let t = m.transposed();
    ///
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.columns(), 2);
    /// assert_eq!(t.row(0), &[1, 4]);
    /// assert_eq!(t.row(2), &[3, 6]);
    /// ```
    pub fn transposed(&self) -> Matrix {
        let data = (0..self.columns)
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();

        Matrix::from_parts(self.columns, self.rows, data)
    }
}
