//! Individual validation stages.
//!
//! Each stage checks one rule against the already-trimmed value. Stages are
//! run in a fixed order by [`FieldValidator`](crate::validation::FieldValidator)
//! and the first failure wins.

use crate::core::charset::is_leading_special;
use crate::core::error::Rejection;
use crate::core::mode::Mode;
use crate::grammar::Grammar;

/// The literal no input may validate to.
pub const RESERVED_WORD: &str = "name";

/// Trait for validation stages.
pub trait ValidationStage: Send + Sync {
    /// Name of this validation stage.
    fn name(&self) -> &str;

    /// Check a trimmed value under `mode`.
    fn check(&self, value: &str, mode: Mode) -> Result<(), Rejection>;
}

/// Rejects values that are empty after trimming.
pub struct EmptyCheck;

impl ValidationStage for EmptyCheck {
    fn name(&self) -> &str {
        "Empty Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        if value.is_empty() {
            Err(Rejection::Empty)
        } else {
            Ok(())
        }
    }
}

/// Rejects values starting with whitespace.
///
/// Never fires through [`FieldValidator`](crate::validation::FieldValidator),
/// which trims first.
pub struct LeadingSpaceCheck;

impl ValidationStage for LeadingSpaceCheck {
    fn name(&self) -> &str {
        "Leading Space Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        match value.chars().next() {
            Some(c) if c.is_whitespace() => Err(Rejection::LeadingSpace),
            _ => Ok(()),
        }
    }
}

/// Rejects values starting with a special character, except in `text` mode.
pub struct LeadingSpecialCheck;

impl ValidationStage for LeadingSpecialCheck {
    fn name(&self) -> &str {
        "Leading Special Character Check"
    }

    fn check(&self, value: &str, mode: Mode) -> Result<(), Rejection> {
        if mode.allows_special_start() {
            return Ok(());
        }
        match value.chars().next() {
            Some(c) if is_leading_special(c) => Err(Rejection::LeadingSpecialCharacter),
            _ => Ok(()),
        }
    }
}

/// Requires the first character to be an ASCII letter or digit.
///
/// In `text` mode this is where a leading special character ends up, so
/// `text` reports this message instead of the special character one.
pub struct AlphanumericStartCheck;

impl ValidationStage for AlphanumericStartCheck {
    fn name(&self) -> &str {
        "Alphanumeric Start Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        match value.chars().next() {
            Some(c) if c.is_ascii_alphanumeric() => Ok(()),
            _ => Err(Rejection::NonAlphanumericStart),
        }
    }
}

/// Rejects `,,` and commas separated only by whitespace.
pub struct ConsecutiveCommaCheck;

impl ValidationStage for ConsecutiveCommaCheck {
    fn name(&self) -> &str {
        "Consecutive Comma Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        if has_consecutive_commas(value) {
            Err(Rejection::ConsecutiveCommas)
        } else {
            Ok(())
        }
    }
}

fn has_consecutive_commas(value: &str) -> bool {
    let mut after_comma = false;
    for c in value.chars() {
        if c == ',' {
            if after_comma {
                return true;
            }
            after_comma = true;
        } else if !c.is_whitespace() {
            after_comma = false;
        }
    }
    false
}

/// Rejects values that start or end with a comma.
pub struct EdgeCommaCheck;

impl ValidationStage for EdgeCommaCheck {
    fn name(&self) -> &str {
        "Edge Comma Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        if value.starts_with(',') || value.ends_with(',') {
            Err(Rejection::EdgeComma)
        } else {
            Ok(())
        }
    }
}

/// Applies the mode's grammar to the whole value.
pub struct GrammarCheck;

impl ValidationStage for GrammarCheck {
    fn name(&self) -> &str {
        "Grammar Check"
    }

    fn check(&self, value: &str, mode: Mode) -> Result<(), Rejection> {
        Grammar::for_mode(mode).check(value)
    }
}

/// Rejects the reserved word, whatever the mode.
pub struct ReservedWordCheck;

impl ValidationStage for ReservedWordCheck {
    fn name(&self) -> &str {
        "Reserved Word Check"
    }

    fn check(&self, value: &str, _mode: Mode) -> Result<(), Rejection> {
        if value == RESERVED_WORD {
            Err(Rejection::ReservedWord)
        } else {
            Ok(())
        }
    }
}
