//! The bilingual message and label catalog
//!
//! Static lookup tables: every key has both translations, checked
//! exhaustively by the tests. Lookup never fails and never allocates.

use dailydose_validator::form::{FieldId, MessageKey};

use crate::language::Language;

// ============================================================================
// VALIDATION MESSAGES
// ============================================================================

/// Resolves a validation message key for the given language.
#[must_use]
pub fn message(lang: Language, key: MessageKey) -> &'static str {
    match lang {
        Language::He => message_he(key),
        Language::En => message_en(key),
    }
}

const fn message_he(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsernameRequired => "שם משתמש הוא שדה חובה",
        MessageKey::UsernameMin => "שם המשתמש חייב להכיל לפחות 3 תווים",
        MessageKey::UsernameMax => "שם המשתמש יכול להכיל עד 40 תווים",
        MessageKey::EmailRequired => "כתובת אימייל היא שדה חובה",
        MessageKey::EmailInvalid => "כתובת האימייל אינה תקינה",
        MessageKey::PhoneMin => "מספר הטלפון חייב להכיל לפחות 8 ספרות",
        MessageKey::PasswordRequired => "סיסמה היא שדה חובה",
        MessageKey::PasswordMin => "הסיסמה חייבת להכיל לפחות 6 תווים",
        MessageKey::PasswordMax => "הסיסמה יכולה להכיל עד 40 תווים",
        MessageKey::ConfirmPasswordRequired => "אימות סיסמה הוא שדה חובה",
        MessageKey::PasswordsMustMatch => "הסיסמאות אינן תואמות",
    }
}

const fn message_en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsernameRequired => "Username is required",
        MessageKey::UsernameMin => "Username must be at least 3 characters",
        MessageKey::UsernameMax => "Username must be at most 40 characters",
        MessageKey::EmailRequired => "Email is required",
        MessageKey::EmailInvalid => "Please enter a valid email address",
        MessageKey::PhoneMin => "Phone number must contain at least 8 digits",
        MessageKey::PasswordRequired => "Password is required",
        MessageKey::PasswordMin => "Password must be at least 6 characters",
        MessageKey::PasswordMax => "Password must be at most 40 characters",
        MessageKey::ConfirmPasswordRequired => "Please confirm your password",
        MessageKey::PasswordsMustMatch => "Passwords do not match",
    }
}

// ============================================================================
// FORM LABELS
// ============================================================================

/// One translatable piece of form chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Title,
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    ProfilePicture,
    Submit,
}

impl Label {
    /// Every label, in render order.
    pub const ALL: [Label; 8] = [
        Label::Title,
        Label::Username,
        Label::Email,
        Label::Phone,
        Label::Password,
        Label::ConfirmPassword,
        Label::ProfilePicture,
        Label::Submit,
    ];
}

/// The label naming a form field.
#[must_use]
pub const fn field_label(field: FieldId) -> Label {
    match field {
        FieldId::Username => Label::Username,
        FieldId::Email => Label::Email,
        FieldId::Phone => Label::Phone,
        FieldId::Password => Label::Password,
        FieldId::ConfirmPassword => Label::ConfirmPassword,
    }
}

/// Resolves a form label for the given language.
#[must_use]
pub fn label(lang: Language, label: Label) -> &'static str {
    match lang {
        Language::He => label_he(label),
        Language::En => label_en(label),
    }
}

const fn label_he(label: Label) -> &'static str {
    match label {
        Label::Title => "הרשמה",
        Label::Username => "שם משתמש",
        Label::Email => "אימייל",
        Label::Phone => "טלפון",
        Label::Password => "סיסמה",
        Label::ConfirmPassword => "אימות סיסמה",
        Label::ProfilePicture => "תמונת פרופיל",
        Label::Submit => "הרשמה",
    }
}

const fn label_en(label: Label) -> &'static str {
    match label {
        Label::Title => "Sign up",
        Label::Username => "Username",
        Label::Email => "Email",
        Label::Phone => "Phone",
        Label::Password => "Password",
        Label::ConfirmPassword => "Confirm password",
        Label::ProfilePicture => "Profile picture",
        Label::Submit => "Sign up",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_message_key_has_both_translations() {
        for key in MessageKey::ALL {
            for lang in [Language::He, Language::En] {
                assert!(!message(lang, key).is_empty(), "{lang}/{key}");
            }
        }
    }

    #[test]
    fn every_label_has_both_translations() {
        for l in Label::ALL {
            for lang in [Language::He, Language::En] {
                assert!(!label(lang, l).is_empty(), "{lang}/{l:?}");
            }
        }
    }

    #[test]
    fn hebrew_messages_are_actually_hebrew() {
        for key in MessageKey::ALL {
            let text = message(Language::He, key);
            assert!(
                text.chars().any(|c| ('א'..='ת').contains(&c)),
                "no Hebrew letters in {key}"
            );
        }
    }

    #[test]
    fn english_messages_are_ascii() {
        for key in MessageKey::ALL {
            assert!(message(Language::En, key).is_ascii(), "{key}");
        }
    }

    #[test]
    fn every_field_has_a_label() {
        for field in FieldId::ALL {
            let l = field_label(field);
            assert!(!label(Language::En, l).is_empty());
        }
    }

    #[test]
    fn known_translations() {
        assert_eq!(
            message(Language::En, MessageKey::UsernameMin),
            "Username must be at least 3 characters"
        );
        assert_eq!(
            message(Language::He, MessageKey::PasswordsMustMatch),
            "הסיסמאות אינן תואמות"
        );
    }
}
