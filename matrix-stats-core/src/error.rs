use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixStatsError {
    #[error("Matrix has no elements")]
    EmptyMatrix,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = core::result::Result<T, MatrixStatsError>;
