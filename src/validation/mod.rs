//! Validation module.
//!
//! The pipeline trims the input, runs the checks shared by every mode, then
//! the mode grammar, then the reserved word check.

pub mod batch;
pub mod pipeline;
pub mod stages;

pub use batch::{validate_batch, BatchReport};
pub use pipeline::FieldValidator;
pub use stages::{
    AlphanumericStartCheck, ConsecutiveCommaCheck, EdgeCommaCheck, EmptyCheck, GrammarCheck,
    LeadingSpaceCheck, LeadingSpecialCheck, ReservedWordCheck, ValidationStage, RESERVED_WORD,
};

use crate::core::mode::Mode;
use crate::core::types::ValidationResult;
use std::sync::OnceLock;

fn shared() -> &'static FieldValidator {
    static VALIDATOR: OnceLock<FieldValidator> = OnceLock::new();
    VALIDATOR.get_or_init(FieldValidator::new)
}

/// Validate `input` under the mode named by `mode`.
///
/// Unknown mode names select the fallback grammar.
pub fn validate_field(input: &str, mode: &str) -> ValidationResult {
    shared().validate(input, Mode::parse(mode))
}

/// Validate `input` under the default `text` mode.
pub fn validate_field_default(input: &str) -> ValidationResult {
    shared().validate(input, Mode::default())
}
