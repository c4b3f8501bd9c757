//! Core traits for the validation system
//!
//! [`Validate`] is the one trait every check implements. It is
//! object-safe so the form schema can hold heterogeneous rule chains as
//! `Box<dyn Validate<Input = str>>`.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type for compile-time safety; `Input` may be
/// unsized so validators can work directly on `str`.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::too_short(self.min, input.chars().count()))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("abc").is_ok());
/// assert!(MinLength { min: 3 }.validate("ab").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success and a [`ValidationError`] describing
    /// the first violated constraint otherwise. Never panics.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(40));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("ab").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both must pass; evaluation short-circuits on the first failure,
    /// whose error is the one reported.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Makes validation conditional on a predicate.
    ///
    /// The inner validator runs only when the condition holds; otherwise
    /// the input passes untouched. This is how optional fields skip
    /// their checks on empty input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dailydose_validator::prelude::*;
    ///
    /// let phone = phone_digits(8).when(|s: &str| !s.is_empty());
    /// assert!(phone.validate("").is_ok()); // skipped
    /// assert!(phone.validate("123").is_err()); // checked, fails
    /// ```
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
