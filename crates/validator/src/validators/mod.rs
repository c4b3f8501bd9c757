//! Built-in validators
//!
//! The primitive checks the registration schema is built from:
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`] — counted in
//!   Unicode scalar values, since the form is Hebrew-first
//! - **Content**: [`Email`]
//! - **Phone**: [`PhoneDigits`] — digit count after stripping formatting
//!
//! Each type also has a lower-case constructor function
//! (`not_empty()`, `min_length(3)`, …) for fluent composition.

pub mod email;
pub mod length;
pub mod phone;

pub use email::{Email, email};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use phone::{PhoneDigits, phone_digits};
