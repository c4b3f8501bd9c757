//! AND combinator - both validators must pass

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Short-circuits on the first failure, so the reported error is always
/// the earliest violated constraint in the chain — the property the form
/// schema relies on for "first rule wins" per field.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// assert!(validator.validate("waylongerthanten").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    first: L,
    second: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(first: L, second: R) -> Self {
        Self { first, second }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.first.validate(input)?;
        self.second.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length};

    #[test]
    fn passes_when_both_pass() {
        let v = min_length(3).and(max_length(5));
        assert!(v.validate("four").is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let v = min_length(3).and(max_length(5));
        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn second_checked_after_first() {
        let v = min_length(3).and(max_length(5));
        let err = v.validate("toolongforthis").unwrap_err();
        assert_eq!(err.code, "max_length");
    }
}
