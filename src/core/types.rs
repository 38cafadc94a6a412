//! The outcome of validating one field.

use crate::core::error::{FieldcheckError, Rejection};
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Result of validating a single input.
///
/// Serializes as `{"valid": true, "value": ...}` or
/// `{"valid": false, "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The trimmed input passed every check.
    Accepted {
        /// The trimmed value.
        value: String,
    },
    /// The input failed a check.
    Rejected {
        /// The first check that failed.
        reason: Rejection,
    },
}

impl ValidationResult {
    /// Create an accepted result.
    pub fn accepted(value: impl Into<String>) -> Self {
        ValidationResult::Accepted { value: value.into() }
    }

    /// Create a rejected result.
    pub fn rejected(reason: Rejection) -> Self {
        ValidationResult::Rejected { reason }
    }

    /// Whether the input was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Accepted { .. })
    }

    /// The accepted value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            ValidationResult::Accepted { value } => Some(value),
            ValidationResult::Rejected { .. } => None,
        }
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationResult::Accepted { .. } => None,
            ValidationResult::Rejected { reason } => Some(*reason),
        }
    }

    /// The rejection message, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.rejection().map(|r| r.message())
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            ValidationResult::Accepted { value } => Ok(value),
            ValidationResult::Rejected { reason } => Err(reason),
        }
    }

    /// Encode as a JSON string in the wire shape.
    pub fn to_json(&self) -> Result<String, FieldcheckError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Result<String, Rejection>> for ValidationResult {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(value) => ValidationResult::Accepted { value },
            Err(reason) => ValidationResult::Rejected { reason },
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Accepted { value } => write!(f, "valid: {}", value),
            ValidationResult::Rejected { reason } => write!(f, "invalid: {}", reason),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Accepted { value } => {
                state.serialize_field("valid", &true)?;
                state.serialize_field("value", value)?;
            }
            ValidationResult::Rejected { reason } => {
                state.serialize_field("valid", &false)?;
                state.serialize_field("message", reason.message())?;
            }
        }
        state.end()
    }
}

/// Wire form used for decoding.
#[derive(Deserialize)]
struct WireResult {
    valid: bool,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl<'de> Deserialize<'de> for ValidationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireResult::deserialize(deserializer)?;
        if wire.valid {
            let value = wire.value.ok_or_else(|| D::Error::missing_field("value"))?;
            Ok(ValidationResult::Accepted { value })
        } else {
            let message = wire.message.ok_or_else(|| D::Error::missing_field("message"))?;
            let reason = Rejection::from_message(&message).ok_or_else(|| {
                D::Error::custom(FieldcheckError::UnknownRejection(message.clone()))
            })?;
            Ok(ValidationResult::Rejected { reason })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_wire_shape() {
        let result = ValidationResult::accepted("John");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true, "value": "John" }));
    }

    #[test]
    fn test_rejected_wire_shape() {
        let result = ValidationResult::rejected(Rejection::NotNumber);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "valid": false, "message": "Input must only contain numbers." })
        );
    }

    #[test]
    fn test_decode_rejected() {
        let json = r#"{"valid": false, "message": "Input must be in camelCase format."}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rejection(), Some(Rejection::NotCamelCase));
    }

    #[test]
    fn test_decode_unknown_message_fails() {
        let json = r#"{"valid": false, "message": "nope"}"#;
        let err = serde_json::from_str::<ValidationResult>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown rejection message"));
    }

    #[test]
    fn test_decode_missing_value_fails() {
        assert!(serde_json::from_str::<ValidationResult>(r#"{"valid": true}"#).is_err());
    }

    #[test]
    fn test_accessors() {
        let ok = ValidationResult::accepted("abc");
        assert!(ok.is_valid());
        assert_eq!(ok.value(), Some("abc"));
        assert_eq!(ok.message(), None);
        assert_eq!(ok.clone().into_result(), Ok("abc".to_string()));

        let err = ValidationResult::rejected(Rejection::Empty);
        assert!(!err.is_valid());
        assert_eq!(err.value(), None);
        assert_eq!(err.message(), Some("Input cannot be empty or just whitespace."));
        assert_eq!(ValidationResult::from(Err(Rejection::Empty)), err);
    }
}
