//! Validation errors raised when a request schema is converted to a record.

use thiserror::Error;

/// A required field was absent or empty after trimming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self { field }
    }
}
