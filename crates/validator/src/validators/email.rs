//! Email format validator

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// RFC-5322-lite: permissive local part, dot-separated domain labels with
// no leading/trailing hyphen. Deliberately not full RFC 5322.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email format.
///
/// Rejects the empty string, so in the form schema the "required" rule
/// must run first for the empty case to be reported as `required`
/// rather than as a format error.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::prelude::*;
///
/// assert!(email().validate("user@example.com").is_ok());
/// assert!(email().validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("email"))
        }
    }
}

/// Creates an email validator.
#[must_use]
pub fn email() -> Email {
    Email
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        let v = email();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("a@b.com").is_ok());
        assert!(v.validate("first.last+tag@sub.domain.co.il").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        let v = email();
        assert!(v.validate("invalid").is_err());
        assert!(v.validate("@example.com").is_err());
        assert!(v.validate("user@").is_err());
        assert!(v.validate("user@-example.com").is_err());
        assert!(v.validate("user name@example.com").is_err());
    }

    #[test]
    fn rejects_empty_string() {
        let err = email().validate("").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("email"));
    }
}
