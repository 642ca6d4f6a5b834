use num_traits::Zero;
use std::fmt::Debug;

/// Generic trait representing a row-major matrix.
/// Rows are not required to share a length; rectangularity is something
/// callers can ask about, not something the trait enforces.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64).
    type Value: Copy + Debug + Default + Zero + PartialEq;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the elements of row `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.row_count()`.
    fn row(&self, index: usize) -> &[Self::Value];

    /// Total number of elements across all rows.
    fn element_count(&self) -> usize {
        (0..self.row_count()).map(|i| self.row(i).len()).sum()
    }

    /// True when the matrix holds no elements at all (zero rows, or only empty rows).
    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// True when every row has the length of the first row.
    fn is_rectangular(&self) -> bool {
        match self.row_count() {
            0 => true,
            rows => {
                let cols = self.row(0).len();
                (1..rows).all(|i| self.row(i).len() == cols)
            }
        }
    }

    /// Returns the dimensions as (rows, columns), or `None` for ragged matrices.
    fn dims(&self) -> Option<(usize, usize)> {
        if !self.is_rectangular() {
            return None;
        }
        let cols = if self.row_count() == 0 { 0 } else { self.row(0).len() };
        Some((self.row_count(), cols))
    }
}

impl<T> Matrix for Vec<Vec<T>>
where
    T: Copy + Debug + Default + Zero + PartialEq,
{
    type Value = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> &[T] {
        &self[index]
    }
}
