//! Validator combinators
//!
//! Wrappers that compose validators into larger ones:
//!
//! - [`And`] — both validators must pass, first failure wins
//! - [`When`] — conditional validation, skipped when the predicate is
//!   false (optional-field semantics)
//!
//! Combinators are usually reached through the fluent methods on
//! [`ValidateExt`](crate::foundation::ValidateExt) rather than
//! constructed directly.

pub mod and;
pub mod when;

pub use and::And;
pub use when::{When, when};
