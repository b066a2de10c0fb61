//! Six digit one-time access code.

use mp_shared::validation::validators;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Length of an access code
pub const CODE_LENGTH: usize = 6;

/// Smallest generated code; generation never yields a leading zero
const MIN_GENERATED: u32 = 100_000;
const MAX_GENERATED: u32 = 999_999;

/// A validated six digit numeric code.
///
/// Only obtainable through [`SixDigitCode::generate`] or the validating
/// [`SixDigitCode::parse`], so holding one means the format is right.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SixDigitCode(String);

impl SixDigitCode {
    /// Generates a code uniformly from 100000..=999999 using the OS CSPRNG
    pub fn generate() -> Self {
        let value: u32 = OsRng.gen_range(MIN_GENERATED..=MAX_GENERATED);
        Self(value.to_string())
    }

    /// Parses a candidate code, requiring exactly six ASCII digits
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        if candidate.len() != CODE_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: "code".to_string(),
                expected: CODE_LENGTH,
                actual: candidate.chars().count(),
            });
        }
        if !validators::is_ascii_digits(candidate, CODE_LENGTH) {
            return Err(ValidationError::InvalidFormat {
                field: "code".to_string(),
            });
        }
        Ok(Self(candidate.to_string()))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SixDigitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep codes out of debug logs.
impl fmt::Debug for SixDigitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SixDigitCode(******)")
    }
}

impl TryFrom<String> for SixDigitCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SixDigitCode> for String {
    fn from(code: SixDigitCode) -> Self {
        code.0
    }
}

impl AsRef<str> for SixDigitCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
