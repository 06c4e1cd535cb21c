use thiserror::Error;

/// Result type for fallible journal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Queue operations never fail; only writing the journal out can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
