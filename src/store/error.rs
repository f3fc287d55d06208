//! Store errors

use std::fmt;

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested key is not present in the store
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "value not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
