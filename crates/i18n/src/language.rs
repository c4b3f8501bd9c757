//! Display language and text direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// LANGUAGE
// ============================================================================

/// The active display language.
///
/// Hebrew is the default — the original form boots with `lang="he"`,
/// `dir="rtl"` and offers English as the toggle target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    /// The BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    /// The other language — what the language switcher flips to.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }

    /// Text direction of this language.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Language::He => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "he" => Ok(Language::He),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

/// Error returned when parsing an unknown language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (expected 'he' or 'en')")]
pub struct ParseLanguageError(String);

// ============================================================================
// DIRECTION
// ============================================================================

/// Horizontal text direction, for the `dir` attribute of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    /// The HTML `dir` attribute value.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_is_the_default() {
        assert_eq!(Language::default(), Language::He);
        assert_eq!(Language::default().direction(), Direction::Rtl);
    }

    #[test]
    fn toggle_is_an_involution() {
        for lang in [Language::He, Language::En] {
            assert_ne!(lang.toggle(), lang);
            assert_eq!(lang.toggle().toggle(), lang);
        }
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::He.direction().tag(), "rtl");
        assert_eq!(Language::En.direction().tag(), "ltr");
    }

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("he".parse::<Language>().unwrap(), Language::He);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("'de'"));
    }
}
