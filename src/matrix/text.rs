//! Text and file serialization for [`Matrix`].
//!
//! The format is one line per row, elements separated by whitespace. It
//! round-trips exactly: `from_text(to_text(m)) == m`.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::matrix::Matrix;

impl Matrix {
    /// Parses a matrix from lines of whitespace-separated integers.
    ///
    /// Fails with [`Error::Parse`] naming the 1-based line and the offending
    /// token on malformed input, then validates the shape exactly like
    /// [`Matrix::from_rows`].
    pub fn from_text<I>(lines: I) -> Result<Matrix, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rows = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            rows.push(parse_line(index + 1, line.as_ref())?);
        }

        Matrix::from_rows(rows)
    }

    /// Formats the matrix as one line per row, elements joined by spaces.
    pub fn to_text(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Reads a matrix from a text file via [`Matrix::from_text`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Matrix, Error> {
        let contents = fs::read_to_string(path)?;
        Matrix::from_text(contents.lines())
    }

    /// Writes the matrix to a text file, one row per line.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut contents = self.to_text().join("\n");
        contents.push('\n');
        fs::write(path, contents)?;
        Ok(())
    }
}

fn parse_line(line: usize, text: &str) -> Result<Vec<i32>, Error> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| Error::Parse {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}
