//! Storage error type.
//!
//! Used by slot store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when reading or writing a slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid slot key: {0}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
