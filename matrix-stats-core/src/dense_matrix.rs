use crate::error::{MatrixStatsError, Result};
use crate::traits::Matrix;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// On the wire this is a plain JSON array of arrays of numbers. Rows of
/// differing length are accepted as-is; use [`DenseMatrix::check_shape`]
/// when a rectangular, non-empty matrix is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenseMatrix<T = f64> {
    rows: Vec<Vec<T>>,
}

impl<T> DenseMatrix<T>
where
    T: Copy + Debug + Default + Zero + PartialEq,
{
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Returns (rows, cols) for a non-empty rectangular matrix.
    ///
    /// # Errors
    /// `EmptyMatrix` if there are no elements, `RaggedRow` for the first row
    /// whose length differs from row 0.
    pub fn check_shape(&self) -> Result<(usize, usize)> {
        if self.is_empty() {
            return Err(MatrixStatsError::EmptyMatrix);
        }
        if let Some(dims) = self.dims() {
            return Ok(dims);
        }
        let expected = self.rows[0].len();
        let (row, found) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
            .unwrap_or((0, expected));
        Err(MatrixStatsError::RaggedRow {
            row,
            expected,
            found,
        })
    }
}

impl<T> Matrix for DenseMatrix<T>
where
    T: Copy + Debug + Default + Zero + PartialEq,
{
    type Value = T;

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> &[T] {
        &self.rows[index]
    }
}
