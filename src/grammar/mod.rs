//! Mode grammars.
//!
//! Each [`Mode`] maps to exactly one anchored pattern and the rejection
//! reported when the pattern does not match. Patterns are compiled once per
//! process on first use.

use crate::core::charset::{class_body, FALLBACK_SPECIAL, GENERAL_SPECIAL};
use crate::core::error::Rejection;
use crate::core::mode::Mode;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// A compiled full-string grammar for one mode.
#[derive(Debug, Clone)]
pub struct Grammar {
    mode: Mode,
    pattern: String,
    regex: Regex,
    rejection: Rejection,
}

impl Grammar {
    fn compile(mode: Mode, pattern: String, rejection: Rejection) -> Self {
        // Patterns are fixed at build time; a failure here is a bug in this module.
        let regex = Regex::new(&pattern).expect("grammar pattern must compile");
        Self {
            mode,
            pattern,
            regex,
            rejection,
        }
    }

    /// The grammar used for `mode`.
    pub fn for_mode(mode: Mode) -> &'static Grammar {
        // Every mode is inserted by `build_table`.
        &table()[&mode]
    }

    /// All grammars, in [`Mode::ALL`] order.
    pub fn all() -> impl Iterator<Item = &'static Grammar> {
        table().values()
    }

    /// The mode this grammar belongs to.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The anchored pattern source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The rejection reported when the grammar does not match.
    pub fn rejection(&self) -> Rejection {
        self.rejection
    }

    /// Whether the whole of `value` matches the grammar.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Check `value`, returning the grammar's rejection on mismatch.
    pub fn check(&self, value: &str) -> Result<(), Rejection> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(self.rejection)
        }
    }
}

fn table() -> &'static IndexMap<Mode, Grammar> {
    static TABLE: OnceLock<IndexMap<Mode, Grammar>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

fn source_for(mode: Mode) -> (String, Rejection) {
    match mode {
        Mode::Number => (r"^[0-9]+$".to_string(), Rejection::NotNumber),
        Mode::Letters => (r"^[a-zA-Z]+$".to_string(), Rejection::NotLetters),
        Mode::Alphanumeric => (r"^[a-zA-Z0-9\s]+$".to_string(), Rejection::NotAlphanumeric),
        Mode::Text | Mode::General => (
            format!(r"^[a-zA-Z0-9\s{}]+$", class_body(GENERAL_SPECIAL)),
            Rejection::InvalidTextCharacters,
        ),
        Mode::Email => (
            r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$".to_string(),
            Rejection::InvalidEmail,
        ),
        Mode::TextUnderscore => (
            r"^[a-zA-Z0-9\s\-_]+$".to_string(),
            Rejection::InvalidTextUnderscore,
        ),
        Mode::SnakeCase => (r"^[a-z]+(?:_[a-z0-9]+)*$".to_string(), Rejection::NotSnakeCase),
        Mode::KebabCase => (r"^[a-z]+(?:-[a-z0-9]+)*$".to_string(), Rejection::NotKebabCase),
        Mode::CamelCase => (r"^[a-z]+(?:[A-Z][a-z]*)*$".to_string(), Rejection::NotCamelCase),
        Mode::Fallback => (
            format!(r"^[a-zA-Z0-9\s{}]+$", class_body(FALLBACK_SPECIAL)),
            Rejection::InvalidCharacters,
        ),
    }
}

fn build_table() -> IndexMap<Mode, Grammar> {
    let mut table = IndexMap::with_capacity(Mode::ALL.len());
    for mode in Mode::ALL {
        let (pattern, rejection) = source_for(mode);
        table.insert(mode, Grammar::compile(mode, pattern, rejection));
    }
    log::debug!("Compiled {} mode grammars", table.len());
    table
}
