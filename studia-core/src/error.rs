//! Error types for studia-core

use thiserror::Error;

/// Main error type for the studia-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Import error for study-log files
    #[error("import error at line {line}: {message}")]
    Import { line: usize, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for studia-core
pub type Result<T> = std::result::Result<T, Error>;
