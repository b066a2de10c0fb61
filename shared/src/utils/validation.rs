//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming whitespace
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string consists of exactly `len` ASCII digits
    pub fn is_ascii_digits(value: &str, len: usize) -> bool {
        value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
    }
}
