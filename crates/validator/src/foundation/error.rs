//! Error types for validation failures
//!
//! A validation failure is data, not control flow. Every check returns
//! `Result<(), ValidationError>`; nothing in the engine ever panics on
//! invalid input. The `code` field is a symbolic, language-independent
//! identifier — display text for the active language is resolved
//! externally, this crate never embeds it.
//!
//! All string fields use `Cow<'static, str>` for zero allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered key-value parameters attached to an error (typically 0-2).
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Carries a symbolic `code` for programmatic handling and i18n, a
/// default English `message` for logs and debugging, an optional `field`
/// path, and the parameters of the failed rule (thresholds, actual
/// values) for message templating.
///
/// # Examples
///
/// ```rust
/// use dailydose_validator::foundation::ValidationError;
///
/// let error = ValidationError::too_short(3, 2).with_field("username");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("3"));
/// assert_eq!(error.field.as_deref(), Some("username"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Symbolic code for programmatic handling and i18n.
    ///
    /// Examples: "required", "min_length", "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable default message in English.
    ///
    /// Localized text is resolved from `code` and `params` by the
    /// translation collaborator, not from this field.
    pub message: Cow<'static, str>,

    /// Optional field name the failure is attributed to.
    pub field: Option<Cow<'static, str>>,

    /// Parameters of the failed rule, as ordered key-value pairs.
    ///
    /// Example: `[("min", "3"), ("actual", "2")]`
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// Static strings take the zero-allocation path; `format!`-ed ones
    /// allocate only when actually constructed.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value for the UI boundary.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    #[must_use]
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    #[must_use]
    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "too_few_digits" error.
    #[must_use]
    pub fn too_few_digits(min: usize, actual: usize) -> Self {
        Self::new(
            "too_few_digits",
            format!("Must contain at least {min} digits"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
        assert!(error.params.is_empty());
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::required().with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::too_short(3, 2);
        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("actual"), Some("2"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn display_includes_field_and_params() {
        let error = ValidationError::too_long(40, 41).with_field("username");
        let rendered = error.to_string();
        assert!(rendered.contains("[username]"));
        assert!(rendered.contains("max_length"));
        assert!(rendered.contains("max=40"));
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::required();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn json_value_shape() {
        let value = ValidationError::too_few_digits(8, 7)
            .with_field("phone")
            .to_json_value();
        assert_eq!(value["code"], "too_few_digits");
        assert_eq!(value["field"], "phone");
        assert_eq!(value["params"]["min"], "8");
    }
}
