//! The result of one evaluation pass

use std::collections::BTreeMap;

use serde::Serialize;

use crate::form::message::MessageKey;
use crate::form::record::FieldId;

/// Outcome of validating one [`Registration`](crate::form::Registration).
///
/// Holds at most one message key per field — the first rule that failed
/// for that field, in the field's declared rule order. An empty map
/// means the record was accepted.
///
/// The map is keyed by [`FieldId`], whose ordering matches the form, so
/// iterating renders errors top-to-bottom next to their fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    errors: BTreeMap<FieldId, MessageKey>,
}

impl Evaluation {
    pub(crate) fn new(errors: BTreeMap<FieldId, MessageKey>) -> Self {
        Self { errors }
    }

    /// Whether the record passed every rule.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message key reported for a field, if any.
    #[must_use]
    pub fn error(&self, field: FieldId) -> Option<MessageKey> {
        self.errors.get(&field).copied()
    }

    /// The full field-to-message-key mapping.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<FieldId, MessageKey> {
        &self.errors
    }

    /// Number of fields with a reported error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates reported errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, MessageKey)> + '_ {
        self.errors.iter().map(|(field, key)| (*field, *key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_evaluation_is_accepted() {
        let eval = Evaluation::default();
        assert!(eval.accepted());
        assert!(eval.is_empty());
        assert_eq!(eval.len(), 0);
        assert_eq!(eval.error(FieldId::Username), None);
    }

    #[test]
    fn iteration_follows_form_order() {
        let mut errors = BTreeMap::new();
        errors.insert(FieldId::ConfirmPassword, MessageKey::PasswordsMustMatch);
        errors.insert(FieldId::Username, MessageKey::UsernameRequired);
        let eval = Evaluation::new(errors);

        let fields: Vec<FieldId> = eval.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldId::Username, FieldId::ConfirmPassword]);
    }

    #[test]
    fn serializes_to_wire_names() {
        let mut errors = BTreeMap::new();
        errors.insert(FieldId::Email, MessageKey::EmailInvalid);
        let json = serde_json::to_value(Evaluation::new(errors)).unwrap();
        assert_eq!(json["errors"]["email"], "emailInvalid");
    }
}
