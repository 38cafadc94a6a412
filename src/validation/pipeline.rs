//! Validation pipeline implementation.

use crate::core::mode::Mode;
use crate::core::types::ValidationResult;
use crate::validation::stages::{
    AlphanumericStartCheck, ConsecutiveCommaCheck, EdgeCommaCheck, EmptyCheck, GrammarCheck,
    LeadingSpaceCheck, LeadingSpecialCheck, ReservedWordCheck, ValidationStage,
};
use std::fmt;

/// Single-field validator.
///
/// Trims the input, then runs the fixed sequence of stages. The first stage
/// that fails decides the rejection. The validator holds no mutable state,
/// so one instance can be shared freely across threads.
pub struct FieldValidator {
    stages: Vec<Box<dyn ValidationStage>>,
}

impl FieldValidator {
    /// Create the validator with the standard stage order.
    pub fn new() -> Self {
        Self {
            stages: vec![
                Box::new(EmptyCheck),
                Box::new(LeadingSpaceCheck),
                Box::new(LeadingSpecialCheck),
                Box::new(AlphanumericStartCheck),
                Box::new(ConsecutiveCommaCheck),
                Box::new(EdgeCommaCheck),
                Box::new(GrammarCheck),
                Box::new(ReservedWordCheck),
            ],
        }
    }

    /// Names of the stages, in the order they run.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name())
    }

    /// Validate `input` under `mode`.
    pub fn validate(&self, input: &str, mode: Mode) -> ValidationResult {
        let value = input.trim();

        for stage in &self.stages {
            if let Err(reason) = stage.check(value, mode) {
                log::debug!("{} rejected input under mode '{}': {}", stage.name(), mode, reason);
                return ValidationResult::rejected(reason);
            }
        }

        log::trace!("Accepted {:?} under mode '{}'", value, mode);
        ValidationResult::accepted(value)
    }

    /// Validate `input` under a mode tag. Unknown tags use the fallback grammar.
    pub fn validate_tagged(&self, input: &str, tag: &str) -> ValidationResult {
        self.validate(input, Mode::parse(tag))
    }

    /// Quick check - just whether `input` would be accepted.
    pub fn is_valid(&self, input: &str, mode: Mode) -> bool {
        self.validate(input, mode).is_valid()
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("stages", &self.stage_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Rejection;

    fn reject(input: &str, mode: Mode) -> Option<Rejection> {
        FieldValidator::new().validate(input, mode).rejection()
    }

    #[test]
    fn test_stage_order() {
        let validator = FieldValidator::new();
        let names: Vec<_> = validator.stage_names().collect();
        assert_eq!(names.first(), Some(&"Empty Check"));
        assert_eq!(names.last(), Some(&"Reserved Word Check"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_trims_before_checking() {
        let result = FieldValidator::new().validate("  John  ", Mode::Letters);
        assert_eq!(result, ValidationResult::accepted("John"));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(reject("", Mode::Text), Some(Rejection::Empty));
        assert_eq!(reject(" \t\n ", Mode::Number), Some(Rejection::Empty));
    }

    #[test]
    fn test_special_start_message_depends_on_mode() {
        assert_eq!(
            reject("@home", Mode::General),
            Some(Rejection::LeadingSpecialCharacter)
        );
        assert_eq!(reject("@home", Mode::Text), Some(Rejection::NonAlphanumericStart));
    }

    #[test]
    fn test_comma_checks_run_before_grammar() {
        assert_eq!(reject("1,,2", Mode::Number), Some(Rejection::ConsecutiveCommas));
        assert_eq!(reject("1, ,2", Mode::Fallback), Some(Rejection::ConsecutiveCommas));
        assert_eq!(reject("1,2,", Mode::Fallback), Some(Rejection::EdgeComma));
        assert_eq!(reject("1,2", Mode::Number), Some(Rejection::NotNumber));
    }

    #[test]
    fn test_reserved_word_runs_after_grammar() {
        assert_eq!(reject("name", Mode::Number), Some(Rejection::NotNumber));
        assert_eq!(reject("name", Mode::Letters), Some(Rejection::ReservedWord));
        assert_eq!(reject("  name ", Mode::Fallback), Some(Rejection::ReservedWord));
    }

    #[test]
    fn test_validate_tagged() {
        let validator = FieldValidator::default();
        assert!(validator.validate_tagged("hello-world", "kebab-case").is_valid());
        assert_eq!(
            validator.validate_tagged("a~b", "no-such-mode").rejection(),
            Some(Rejection::InvalidCharacters)
        );
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldValidator>();
    }
}
