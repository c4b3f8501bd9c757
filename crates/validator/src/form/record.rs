//! The submission record and field identifiers

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD IDENTIFIERS
// ============================================================================

/// Identifies one field of the registration form.
///
/// `Ord` follows the form's declared field order, so error maps keyed by
/// `FieldId` iterate top-to-bottom the way the fields render.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in declared form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Username,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// The field's wire name, as the original form named it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SUBMISSION RECORD
// ============================================================================

/// One snapshot of the form's field values, read once per validation
/// pass.
///
/// All text fields are owned strings and always present — an absent
/// field is simply the empty string, which `Default` (and
/// `#[serde(default)]` on the wire) guarantees. The profile picture is
/// an opaque reference the validator never inspects.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::form::Registration;
///
/// let record = Registration {
///     username: "alice".into(),
///     email: "alice@example.com".into(),
///     password: "secret1".into(),
///     confirm_password: "secret1".into(),
///     ..Registration::default()
/// };
/// assert!(record.phone.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    /// Optional — the empty string means "not provided".
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    /// Opaque reference to the picked file; never validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<PathBuf>,
}

impl Registration {
    /// Returns the text value of a field.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
