//! # dailydose-i18n
//!
//! The translation collaborator of the registration form: resolves the
//! validator's symbolic [`MessageKey`]s and the form's chrome labels to
//! Hebrew or English display text, and models the language toggle with
//! its text direction.
//!
//! The validation engine never depends on this crate — switching
//! language changes which text a key renders as, never which rules
//! fire.
//!
//! ```rust
//! use dailydose_i18n::{Language, message};
//! use dailydose_validator::form::MessageKey;
//!
//! assert_eq!(
//!     message(Language::En, MessageKey::PasswordsMustMatch),
//!     "Passwords do not match"
//! );
//! assert_eq!(Language::default(), Language::He); // the form boots in Hebrew
//! ```

pub mod catalog;
pub mod language;

pub use catalog::{Label, field_label, label, message};
pub use language::{Direction, Language, ParseLanguageError};
