//! Error types for Fieldcheck.
//!
//! Two kinds of failure exist and they are kept apart:
//! - [`Rejection`]: an input failed validation. This is an ordinary outcome,
//!   carried inside [`ValidationResult::Rejected`](crate::core::types::ValidationResult),
//!   never propagated as an error by the validator itself.
//! - [`FieldcheckError`]: the surface around the validator failed (reading
//!   input files, parsing configuration, decoding results).

use thiserror::Error;

/// Why an input was rejected.
///
/// The `Display` text of each variant is the user-facing message and is
/// part of the public contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("Input cannot be empty or just whitespace.")]
    Empty,

    #[error("Input cannot start with a space.")]
    LeadingSpace,

    #[error("Input cannot start with a special character.")]
    LeadingSpecialCharacter,

    #[error("Input must start with at least one letter or number.")]
    NonAlphanumericStart,

    #[error("Input cannot contain consecutive commas or commas with spaces.")]
    ConsecutiveCommas,

    #[error("Input cannot start or end with a comma.")]
    EdgeComma,

    #[error("Input must only contain numbers.")]
    NotNumber,

    #[error("Input must only contain letters.")]
    NotLetters,

    #[error("Input can only contain letters, numbers, and spaces.")]
    NotAlphanumeric,

    #[error("Input can only contain letters, numbers, spaces, and valid special characters.")]
    InvalidTextCharacters,

    #[error("Input must be a valid email address.")]
    InvalidEmail,

    #[error("Input can only contain letters, numbers, spaces, hyphens, and underscores.")]
    InvalidTextUnderscore,

    #[error("Input must be in snake_case format.")]
    NotSnakeCase,

    #[error("Input must be in kebab-case format.")]
    NotKebabCase,

    #[error("Input must be in camelCase format.")]
    NotCamelCase,

    #[error("Input contains invalid characters.")]
    InvalidCharacters,

    #[error("Input cannot be the same as the reserved word 'name'.")]
    ReservedWord,
}

impl Rejection {
    /// Every rejection in the catalog.
    pub const ALL: [Rejection; 17] = [
        Rejection::Empty,
        Rejection::LeadingSpace,
        Rejection::LeadingSpecialCharacter,
        Rejection::NonAlphanumericStart,
        Rejection::ConsecutiveCommas,
        Rejection::EdgeComma,
        Rejection::NotNumber,
        Rejection::NotLetters,
        Rejection::NotAlphanumeric,
        Rejection::InvalidTextCharacters,
        Rejection::InvalidEmail,
        Rejection::InvalidTextUnderscore,
        Rejection::NotSnakeCase,
        Rejection::NotKebabCase,
        Rejection::NotCamelCase,
        Rejection::InvalidCharacters,
        Rejection::ReservedWord,
    ];

    /// The catalog message for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::Empty => "Input cannot be empty or just whitespace.",
            Rejection::LeadingSpace => "Input cannot start with a space.",
            Rejection::LeadingSpecialCharacter => "Input cannot start with a special character.",
            Rejection::NonAlphanumericStart => {
                "Input must start with at least one letter or number."
            }
            Rejection::ConsecutiveCommas => {
                "Input cannot contain consecutive commas or commas with spaces."
            }
            Rejection::EdgeComma => "Input cannot start or end with a comma.",
            Rejection::NotNumber => "Input must only contain numbers.",
            Rejection::NotLetters => "Input must only contain letters.",
            Rejection::NotAlphanumeric => "Input can only contain letters, numbers, and spaces.",
            Rejection::InvalidTextCharacters => {
                "Input can only contain letters, numbers, spaces, and valid special characters."
            }
            Rejection::InvalidEmail => "Input must be a valid email address.",
            Rejection::InvalidTextUnderscore => {
                "Input can only contain letters, numbers, spaces, hyphens, and underscores."
            }
            Rejection::NotSnakeCase => "Input must be in snake_case format.",
            Rejection::NotKebabCase => "Input must be in kebab-case format.",
            Rejection::NotCamelCase => "Input must be in camelCase format.",
            Rejection::InvalidCharacters => "Input contains invalid characters.",
            Rejection::ReservedWord => "Input cannot be the same as the reserved word 'name'.",
        }
    }

    /// Look up a rejection by its exact catalog message.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.message() == message)
    }

    /// Whether this rejection comes from a check shared by all modes rather
    /// than from a mode grammar.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Rejection::Empty
                | Rejection::LeadingSpace
                | Rejection::LeadingSpecialCharacter
                | Rejection::NonAlphanumericStart
                | Rejection::ConsecutiveCommas
                | Rejection::EdgeComma
                | Rejection::ReservedWord
        )
    }

    /// Get a suggestion for fixing the input.
    pub fn suggested_fix(&self) -> Option<&'static str> {
        match self {
            Rejection::Empty => Some("Provide a non-blank value"),
            Rejection::LeadingSpecialCharacter | Rejection::NonAlphanumericStart => {
                Some("Start the value with a letter or digit")
            }
            Rejection::ConsecutiveCommas => Some("Put a value between each pair of commas"),
            Rejection::EdgeComma => Some("Remove the leading or trailing comma"),
            Rejection::NotSnakeCase => Some("Use lowercase words joined by '_', e.g. hello_world"),
            Rejection::NotKebabCase => Some("Use lowercase words joined by '-', e.g. hello-world"),
            Rejection::NotCamelCase => Some("Start lowercase and capitalize each later word, e.g. helloWorld"),
            Rejection::InvalidEmail => Some("Use the form user@example.com"),
            Rejection::ReservedWord => Some("Choose a different value"),
            _ => None,
        }
    }
}

/// Top-level error type for the crate surface.
#[derive(Error, Debug)]
pub enum FieldcheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config value for '{key}': {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Unknown rejection message: {0}")]
    UnknownRejection(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Fieldcheck operations.
pub type FieldcheckResult<T> = Result<T, FieldcheckError>;
