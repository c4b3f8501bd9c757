//! The registration form schema
//!
//! Everything specific to the Daily Dose registration screen lives
//! here: the submission record ([`Registration`]), the field and message
//! identifiers ([`FieldId`], [`MessageKey`]), the fixed rule set
//! ([`FormValidator`]) and the result of one evaluation pass
//! ([`Evaluation`]).
//!
//! One validation pass is a pure function: the validator holds no
//! mutable state, the record is read-only, and the same record always
//! produces the same evaluation.

pub mod message;
pub mod outcome;
pub mod record;
pub mod rules;

pub use message::MessageKey;
pub use outcome::Evaluation;
pub use record::{FieldId, Registration};
pub use rules::{CrossFieldRule, FieldRule, FormValidator};
