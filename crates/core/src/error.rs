//! Error types cho core library

use thiserror::Error;

/// Custom error type cho core library
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Log file is not open")]
    LogNotOpen,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias sử dụng CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
