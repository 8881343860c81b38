use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source file is empty: {0:?}")]
    EmptySource(PathBuf),

    #[error("Source file {path:?} is unreadable as JSON: {reason}")]
    Json { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Worker failure: {0}")]
    Worker(String),

    #[error("Incomplete batch: expected {expected} results, got {actual}")]
    IncompleteBatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::Json`] from any parse failure tied to a source path.
    pub fn json(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Json {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
