//! Symbolic message keys
//!
//! A message key identifies one human-readable validation message
//! without containing any text. The active display language only
//! decides how a key is rendered, never which keys fire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic identifier of one validation message.
///
/// `as_str()` yields the translation-catalog key the original form used,
/// e.g. `register.errors.usernameMin`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    UsernameRequired,
    UsernameMin,
    UsernameMax,
    EmailRequired,
    EmailInvalid,
    PhoneMin,
    PasswordRequired,
    PasswordMin,
    PasswordMax,
    ConfirmPasswordRequired,
    PasswordsMustMatch,
}

impl MessageKey {
    /// Every message key the schema can produce.
    pub const ALL: [MessageKey; 11] = [
        MessageKey::UsernameRequired,
        MessageKey::UsernameMin,
        MessageKey::UsernameMax,
        MessageKey::EmailRequired,
        MessageKey::EmailInvalid,
        MessageKey::PhoneMin,
        MessageKey::PasswordRequired,
        MessageKey::PasswordMin,
        MessageKey::PasswordMax,
        MessageKey::ConfirmPasswordRequired,
        MessageKey::PasswordsMustMatch,
    ];

    /// The full translation-catalog key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::UsernameRequired => "register.errors.usernameRequired",
            MessageKey::UsernameMin => "register.errors.usernameMin",
            MessageKey::UsernameMax => "register.errors.usernameMax",
            MessageKey::EmailRequired => "register.errors.emailRequired",
            MessageKey::EmailInvalid => "register.errors.emailInvalid",
            MessageKey::PhoneMin => "register.errors.phoneMin",
            MessageKey::PasswordRequired => "register.errors.passwordRequired",
            MessageKey::PasswordMin => "register.errors.passwordMin",
            MessageKey::PasswordMax => "register.errors.passwordMax",
            MessageKey::ConfirmPasswordRequired => "register.errors.confirmPasswordRequired",
            MessageKey::PasswordsMustMatch => "register.errors.passwordsMustMatch",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
