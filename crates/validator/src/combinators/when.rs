//! WHEN combinator - conditional validation
//!
//! [`When`] applies its inner validator only while a predicate holds;
//! otherwise the input passes untouched. The registration form uses it
//! for the optional phone field, whose digit check is skipped entirely
//! on empty input.

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a validator based on a predicate.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::prelude::*;
///
/// // Validate only non-empty strings
/// let validator = min_length(5).when(|s: &str| !s.is_empty());
/// assert!(validator.validate("").is_ok()); // skipped
/// assert!(validator.validate("hi").is_err()); // checked, too short
/// assert!(validator.validate("hello").is_ok()); // checked, passes
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    validator: V,
    condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a validator and condition.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::phone_digits;

    #[test]
    fn skipped_when_condition_false() {
        let v = phone_digits(8).when(|s: &str| !s.is_empty());
        assert!(v.validate("").is_ok());
    }

    #[test]
    fn applied_when_condition_true() {
        let v = phone_digits(8).when(|s: &str| !s.is_empty());
        assert!(v.validate("1234567").is_err());
        assert!(v.validate("12345678").is_ok());
    }

    #[test]
    fn free_function_matches_method() {
        let v = when(phone_digits(8), |s: &str| !s.is_empty());
        assert!(v.validate("").is_ok());
        assert!(v.validate("123").is_err());
    }
}
