//! Validation modes.
//!
//! A mode selects which grammar the final pipeline stage applies. Parsing a
//! mode tag never fails: any tag that is not recognized selects
//! [`Mode::Fallback`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The grammar selector for a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// ASCII digits only.
    Number,
    /// ASCII letters only.
    Letters,
    /// Letters, digits and whitespace.
    Alphanumeric,
    /// Letters, digits, whitespace and the general special characters.
    ///
    /// The only mode that skips the leading special character stage.
    #[default]
    Text,
    /// Same grammar as [`Mode::Text`], but keeps the leading special character stage.
    General,
    /// `local@domain.tld`.
    Email,
    /// Letters, digits, whitespace, hyphens and underscores.
    TextUnderscore,
    /// `lower_case_words`.
    SnakeCase,
    /// `lower-case-words`.
    KebabCase,
    /// `lowerThenCapitalized`.
    CamelCase,
    /// Any unrecognized tag.
    Fallback,
}

impl Mode {
    /// Every mode, in the order they are listed to users.
    pub const ALL: [Mode; 11] = [
        Mode::Number,
        Mode::Letters,
        Mode::Alphanumeric,
        Mode::Text,
        Mode::General,
        Mode::Email,
        Mode::TextUnderscore,
        Mode::SnakeCase,
        Mode::KebabCase,
        Mode::CamelCase,
        Mode::Fallback,
    ];

    /// Resolve a mode tag. Unknown tags resolve to [`Mode::Fallback`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "number" => Mode::Number,
            "letters" => Mode::Letters,
            "alphanumeric" => Mode::Alphanumeric,
            "text" => Mode::Text,
            "general" => Mode::General,
            "email" => Mode::Email,
            "text-underscore" => Mode::TextUnderscore,
            "snake_case" => Mode::SnakeCase,
            "kebab-case" => Mode::KebabCase,
            "camelCase" => Mode::CamelCase,
            _ => Mode::Fallback,
        }
    }

    /// The canonical tag for this mode. The fallback has no tag of its own
    /// and reports `"default"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Number => "number",
            Mode::Letters => "letters",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Text => "text",
            Mode::General => "general",
            Mode::Email => "email",
            Mode::TextUnderscore => "text-underscore",
            Mode::SnakeCase => "snake_case",
            Mode::KebabCase => "kebab-case",
            Mode::CamelCase => "camelCase",
            Mode::Fallback => "default",
        }
    }

    /// Whether inputs may start with a special character before the
    /// alphanumeric-start stage sees them.
    pub fn allows_special_start(&self) -> bool {
        matches!(self, Mode::Text)
    }

    /// Short description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Number => "digits only",
            Mode::Letters => "letters only",
            Mode::Alphanumeric => "letters, digits and spaces",
            Mode::Text => "letters, digits, spaces and special characters",
            Mode::General => "like text, but may not start with a special character",
            Mode::Email => "an email address",
            Mode::TextUnderscore => "letters, digits, spaces, hyphens and underscores",
            Mode::SnakeCase => "snake_case identifier",
            Mode::KebabCase => "kebab-case identifier",
            Mode::CamelCase => "camelCase identifier",
            Mode::Fallback => "any unrecognized mode: letters, digits, spaces and punctuation",
        }
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::parse(s))
    }
}

impl From<&str> for Mode {
    fn from(tag: &str) -> Self {
        Mode::parse(tag)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Mode::parse(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for mode in Mode::ALL.iter().filter(|m| **m != Mode::Fallback) {
            assert_eq!(Mode::parse(mode.tag()), *mode);
        }
    }

    #[test]
    fn test_unknown_tags_fall_back() {
        assert_eq!(Mode::parse("zipcode"), Mode::Fallback);
        assert_eq!(Mode::parse(""), Mode::Fallback);
        // Tags are case sensitive
        assert_eq!(Mode::parse("Number"), Mode::Fallback);
        assert_eq!(Mode::parse("camelcase"), Mode::Fallback);
        assert_eq!(Mode::parse("default"), Mode::Fallback);
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(Mode::default(), Mode::Text);
        assert!(Mode::Text.allows_special_start());
        assert!(!Mode::General.allows_special_start());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Mode::KebabCase).unwrap();
        assert_eq!(json, "\"kebab-case\"");

        let mode: Mode = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(mode, Mode::Fallback);
    }
}
