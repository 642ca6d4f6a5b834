//! # Matrix Statistics Core Library
//!
//! Provides the dense matrix type and the pure reductions used by the analysis
//! service: descriptive statistics and the diagonal-matrix predicate.

// Declare modules
pub mod dense_matrix;
pub mod diagonal;
pub mod error;
pub mod stats;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use diagonal::is_diagonal;
pub use error::MatrixStatsError;
pub use stats::{compute_stats, MatrixStats};
pub use traits::Matrix;
