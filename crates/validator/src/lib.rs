//! # dailydose-validator
//!
//! Declarative validation engine for the Daily Dose registration form.
//!
//! The crate has two layers:
//!
//! - a small generic engine ([`foundation`], [`combinators`],
//!   [`validators`]): an object-safe [`Validate`](foundation::Validate)
//!   trait, primitive checks composed with `.and()` / `.when()`, and a
//!   structured [`ValidationError`](foundation::ValidationError) whose
//!   `code` identifies the failure symbolically;
//! - the registration schema ([`form`]): the fixed, ordered rule set for
//!   the five form fields, evaluated into an
//!   [`Evaluation`](form::Evaluation) mapping each invalid field to the
//!   message key of its first failing rule.
//!
//! Message keys are opaque identifiers; resolving them to Hebrew or
//! English display text is the job of the `dailydose-i18n` crate, never
//! of this one.
//!
//! ## Quick Start
//!
//! ```rust
//! use dailydose_validator::prelude::*;
//!
//! let form = FormValidator::new();
//! let record = Registration {
//!     username: "alice".into(),
//!     email: "alice@example.com".into(),
//!     password: "secret1".into(),
//!     confirm_password: "secret1".into(),
//!     ..Registration::default()
//! };
//! assert!(form.validate(&record).accepted());
//!
//! let empty = Registration::default();
//! let report = form.validate(&empty);
//! assert_eq!(report.error(FieldId::Username), Some(MessageKey::UsernameRequired));
//! ```

// ValidationError is the fundamental error type for all checks — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod validators;
