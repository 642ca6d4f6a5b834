use crate::diagonal::is_diagonal;
use crate::traits::Matrix;
use serde::Serialize;

/// Descriptive statistics of a single matrix.
///
/// For a matrix without elements `max` stays at `-inf`, `min` at `+inf` and
/// `average` is `NaN`; these serialize as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixStats {
    pub max: f64,
    pub min: f64,
    pub sum: f64,
    pub average: f64,
    pub is_diagonal: bool,
}

/// Computes max, min, sum, average and the diagonal predicate in a single
/// row-major pass (plus the pass done by [`is_diagonal`]).
pub fn compute_stats<M: Matrix<Value = f64> + ?Sized>(matrix: &M) -> MatrixStats {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for i in 0..matrix.row_count() {
        for &value in matrix.row(i) {
            max = max.max(value);
            min = min.min(value);
            sum += value;
            count += 1;
        }
    }

    let average = sum / count as f64;
    let is_diagonal = is_diagonal(matrix);
    log::debug!(
        "Computed stats over {} elements ({} rows), diagonal: {}",
        count,
        matrix.row_count(),
        is_diagonal
    );

    MatrixStats {
        max,
        min,
        sum,
        average,
        is_diagonal,
    }
}
