//! Error types for the qmaze crate

use thiserror::Error;

/// Main error type for the qmaze crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no goal cell")]
    MissingGoal,

    #[error("grid has {count} start cells (expected exactly 1)")]
    MultipleStarts { count: usize },

    #[error("grid has {count} goal cells (expected exactly 1)")]
    MultipleGoals { count: usize },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("ragged grid: row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
