//! The fixed rule set and its interpreter
//!
//! [`FormValidator`] holds the registration schema as data: an ordered
//! list of per-field [`FieldRule`]s followed by the cross-field rules.
//! Evaluation applies each field's rules in declared order and keeps the
//! first failure per field; fields never block each other.

use std::collections::BTreeMap;
use std::fmt;

use crate::form::message::MessageKey;
use crate::form::outcome::Evaluation;
use crate::form::record::{FieldId, Registration};
use crate::foundation::{Validate, ValidateExt};
use crate::validators::{email, max_length, min_length, not_empty, phone_digits};

// ============================================================================
// FIELD RULE
// ============================================================================

/// One ordered validation rule for one field.
///
/// The check itself is any boxed [`Validate`] over `str`; the rule adds
/// the field it reads and the message key reported when the check
/// fails.
pub struct FieldRule {
    field: FieldId,
    key: MessageKey,
    check: Box<dyn Validate<Input = str> + Send + Sync>,
}

impl FieldRule {
    /// Creates a rule from a field, its message key, and a check.
    pub fn new(
        field: FieldId,
        key: MessageKey,
        check: impl Validate<Input = str> + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            key,
            check: Box::new(check),
        }
    }

    /// The field this rule reads and reports against.
    #[must_use]
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// The message key reported when the check fails.
    #[must_use]
    pub fn key(&self) -> MessageKey {
        self.key
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("key", &self.key)
            .field("check", &"<validator>")
            .finish()
    }
}

// ============================================================================
// CROSS-FIELD RULE
// ============================================================================

/// A rule whose predicate reads the whole record but reports against
/// one designated field.
///
/// Cross-field rules run after all per-field rules and never displace an
/// error the report field already carries — a field's own "required"
/// failure outranks a relationship failure.
#[derive(Debug, Clone, Copy)]
pub struct CrossFieldRule {
    report: FieldId,
    key: MessageKey,
    predicate: fn(&Registration) -> bool,
}

impl CrossFieldRule {
    /// Creates a cross-field rule; `predicate` returns true when the
    /// record satisfies it.
    pub fn new(report: FieldId, key: MessageKey, predicate: fn(&Registration) -> bool) -> Self {
        Self {
            report,
            key,
            predicate,
        }
    }

    /// The field the violation is reported against.
    #[must_use]
    pub fn report_field(&self) -> FieldId {
        self.report
    }
}

// ============================================================================
// FORM VALIDATOR
// ============================================================================

/// The registration form's rule set and its evaluator.
///
/// The rule set is fixed and immutable: build the validator once and
/// reuse it for every pass. Language never enters here — rules fire
/// identically regardless of display language.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::form::{FieldId, FormValidator, MessageKey, Registration};
///
/// let form = FormValidator::new();
/// let report = form.validate(&Registration {
///     username: "ab".into(),
///     ..Registration::default()
/// });
/// assert_eq!(report.error(FieldId::Username), Some(MessageKey::UsernameMin));
/// ```
#[derive(Debug)]
pub struct FormValidator {
    rules: Vec<FieldRule>,
    cross: Vec<CrossFieldRule>,
}

impl FormValidator {
    /// Builds the fixed registration rule set.
    #[must_use]
    pub fn new() -> Self {
        use FieldId::{ConfirmPassword, Email, Password, Phone, Username};

        let rules = vec![
            FieldRule::new(Username, MessageKey::UsernameRequired, not_empty()),
            FieldRule::new(Username, MessageKey::UsernameMin, min_length(3)),
            FieldRule::new(Username, MessageKey::UsernameMax, max_length(40)),
            FieldRule::new(Email, MessageKey::EmailRequired, not_empty()),
            FieldRule::new(Email, MessageKey::EmailInvalid, email()),
            // Optional field: the digit check is skipped entirely on empty
            // input, so an empty phone is always valid.
            FieldRule::new(
                Phone,
                MessageKey::PhoneMin,
                phone_digits(8).when(|s: &str| !s.is_empty()),
            ),
            FieldRule::new(Password, MessageKey::PasswordRequired, not_empty()),
            FieldRule::new(Password, MessageKey::PasswordMin, min_length(6)),
            FieldRule::new(Password, MessageKey::PasswordMax, max_length(40)),
            FieldRule::new(
                ConfirmPassword,
                MessageKey::ConfirmPasswordRequired,
                not_empty(),
            ),
        ];

        let cross = vec![CrossFieldRule::new(
            ConfirmPassword,
            MessageKey::PasswordsMustMatch,
            |record| record.password == record.confirm_password,
        )];

        Self { rules, cross }
    }

    /// Evaluates one submission record against the whole rule set.
    ///
    /// Pure and infallible: same record, same result; rejection is a
    /// populated error map, never a fault.
    #[must_use = "validation result must be checked"]
    pub fn validate(&self, record: &Registration) -> Evaluation {
        let mut errors: BTreeMap<FieldId, MessageKey> = BTreeMap::new();

        for rule in &self.rules {
            // Per-field short-circuit: the first failing rule owns the
            // field's error; other fields keep evaluating.
            if errors.contains_key(&rule.field) {
                continue;
            }
            if rule.check.validate(record.field(rule.field)).is_err() {
                errors.insert(rule.field, rule.key);
            }
        }

        for rule in &self.cross {
            if !errors.contains_key(&rule.report) && !(rule.predicate)(record) {
                errors.insert(rule.report, rule.key);
            }
        }

        Evaluation::new(errors)
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
