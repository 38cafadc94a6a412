//! Core types for the Fieldcheck validator.
//!
//! This module contains the foundational types shared by the pipeline:
//! - Validation modes
//! - Special character sets
//! - The rejection catalog and error types
//! - The validation result

pub mod charset;
pub mod error;
pub mod mode;
pub mod types;

// Re-export commonly used types
pub use error::{FieldcheckError, FieldcheckResult, Rejection};
pub use mode::Mode;
pub use types::ValidationResult;
