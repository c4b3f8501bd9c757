//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes. The
//! form's primary language is Hebrew, where every letter is two bytes in
//! UTF-8; byte counting would silently halve the effective limits.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is not empty.
///
/// The "required" rule of the form schema. Whitespace counts as content,
/// matching the original form's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEmpty;

impl Validate for NotEmpty {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::required())
        } else {
            Ok(())
        }
    }
}

/// Creates a not-empty validator.
#[must_use]
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a string has at least a minimum length in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    /// Minimum length (inclusive).
    pub min: usize,
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len >= self.min {
            Ok(())
        } else {
            Err(ValidationError::too_short(self.min, len))
        }
    }
}

/// Creates a minimum length validator.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a string does not exceed a maximum length in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength {
    /// Maximum length (inclusive).
    pub max: usize,
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::too_long(self.max, len))
        }
    }
}

/// Creates a maximum length validator.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

// ============================================================================
// TESTS
// ============================================================================
