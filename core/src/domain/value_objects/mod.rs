//! Value objects representing immutable domain concepts.

pub mod categorization;
pub mod six_digit_code;

// Re-export commonly used types
pub use categorization::DocumentCategorization;
pub use six_digit_code::{SixDigitCode, CODE_LENGTH};
