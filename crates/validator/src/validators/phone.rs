//! Phone digit-count validator
//!
//! The form accepts phone numbers in any local formatting; validity is
//! decided purely by how many digits remain after stripping everything
//! else. Spaces, dashes, parentheses and plus signs all count as
//! formatting.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE DIGITS VALIDATOR
// ============================================================================

/// Validates the digit count of a phone number.
///
/// Strips every non-digit character, then requires at least `min_digits`
/// remaining. Makes no claim about regional validity.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::prelude::*;
///
/// let v = phone_digits(8);
/// assert!(v.validate("12-34-56-78").is_ok()); // 8 digits after stripping
/// assert!(v.validate("1234567").is_err()); // 7 digits
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneDigits {
    /// Minimum number of digit characters (inclusive).
    pub min_digits: usize,
}

impl Validate for PhoneDigits {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let digits = input.chars().filter(char::is_ascii_digit).count();
        if digits >= self.min_digits {
            Ok(())
        } else {
            Err(ValidationError::too_few_digits(self.min_digits, digits))
        }
    }
}

/// Creates a phone digit-count validator.
#[must_use]
pub fn phone_digits(min_digits: usize) -> PhoneDigits {
    PhoneDigits { min_digits }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_digits_after_stripping() {
        let v = phone_digits(8);
        assert!(v.validate("12345678").is_ok());
        assert!(v.validate("12-34-56-78").is_ok());
        assert!(v.validate("+972 (50) 123-4567").is_ok());
        assert!(v.validate("050 123 4567").is_ok());
    }

    #[test]
    fn rejects_below_threshold() {
        let v = phone_digits(8);
        assert!(v.validate("1234567").is_err());
        assert!(v.validate("12-34-56-7").is_err());
        assert!(v.validate("+-() ").is_err());
        assert!(v.validate("").is_err());
    }

    #[test]
    fn formatting_alone_never_satisfies() {
        // Plus signs and separators are stripped, not counted.
        let err = phone_digits(8).validate("++++++++").unwrap_err();
        assert_eq!(err.code, "too_few_digits");
        assert_eq!(err.param("actual"), Some("0"));
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(phone_digits(8).validate("12345678").is_ok());
        assert!(phone_digits(8).validate("123456789").is_ok());
    }
}
