//! Domain-specific error types for access sharing and input validation
//!
//! Messages here are user-presentable. A wrong, expired, consumed or
//! never-issued code all surface as the same access error.

use thiserror::Error;

/// Access sharing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Invalid or expired code")]
    InvalidOrExpiredCode,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid date: {field}")]
    InvalidDate { field: String },
}
