//! Common imports for working with the validation engine.
//!
//! ```rust
//! use dailydose_validator::prelude::*;
//!
//! let check = min_length(3).and(max_length(40));
//! assert!(check.validate("alice").is_ok());
//! ```

pub use crate::combinators::{And, When, when};
pub use crate::form::{
    CrossFieldRule, Evaluation, FieldId, FieldRule, FormValidator, MessageKey, Registration,
};
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::validators::{
    Email, MaxLength, MinLength, NotEmpty, PhoneDigits, email, max_length, min_length, not_empty,
    phone_digits,
};
