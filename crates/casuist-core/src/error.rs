//! Error types for Casuist
//!
//! Errors are only expected to originate at the I/O boundary (precedent
//! database loading). The reasoning pipeline itself fails soft: missing or
//! invalid input yields empty collections or unchanged copies, never an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn database(reason: impl Into<String>) -> Self {
        Self::Database(reason.into())
    }
}
