//! # Fieldcheck - Single-field String Validation
//!
//! Fieldcheck validates one string at a time against a named mode. Every
//! input is trimmed, checked against rules shared by all modes, matched
//! against the mode's grammar, and finally checked against the reserved word.
//! The outcome is a [`ValidationResult`](core::types::ValidationResult):
//! either the trimmed value or the first rejection.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let result = validate_field("  John  ", "letters");
//! assert_eq!(result.value(), Some("John"));
//!
//! let result = validate_field("123abc", "number");
//! assert_eq!(result.message(), Some("Input must only contain numbers."));
//! ```
//!
//! ## Modes
//!
//! `number`, `letters`, `alphanumeric`, `text` (the default), `general`,
//! `email`, `text-underscore`, `snake_case`, `kebab-case` and `camelCase`.
//! Any other mode name uses a permissive fallback grammar.
//!
//! ## Architecture
//!
//! - [`core`]: modes, character sets, rejections and the result type
//! - [`grammar`]: the compiled pattern for each mode
//! - [`validation`]: the staged pipeline and batch validation
//! - [`config`]: configuration for the command-line front end

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod grammar;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use fieldcheck::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::error::{FieldcheckError, FieldcheckResult, Rejection};
    pub use crate::core::mode::Mode;
    pub use crate::core::types::ValidationResult;

    // Grammars
    pub use crate::grammar::Grammar;

    // Validation
    pub use crate::validation::batch::{validate_batch, BatchReport};
    pub use crate::validation::pipeline::FieldValidator;
    pub use crate::validation::stages::ValidationStage;
    pub use crate::validation::{validate_field, validate_field_default};

    // Configuration
    pub use crate::config::{CliConfig, OutputFormat};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
