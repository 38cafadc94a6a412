//! Special character sets.
//!
//! Three distinct sets are in play and they are not interchangeable:
//!
//! - [`LEADING_SPECIAL`]: characters a non-`text` input may not start with.
//! - [`GENERAL_SPECIAL`]: extra characters the `text` and `general` grammars accept.
//!   Currently the same characters as [`LEADING_SPECIAL`].
//! - [`FALLBACK_SPECIAL`]: extra characters the fallback grammar accepts. Adds
//!   `,` and `.` to the general set.

/// Characters rejected at the start of input for every mode except `text`.
pub const LEADING_SPECIAL: &str = "!@#$%^&*()_+-=[]{};':\"\\|<>/?";

/// Special characters accepted by the `text` and `general` grammars.
pub const GENERAL_SPECIAL: &str = "!@#$%^&*()_+-=[]{};':\"\\|<>/?";

/// Special characters accepted by the fallback grammar.
pub const FALLBACK_SPECIAL: &str = "-!@#$%^&*()_+=[]{};':\"\\|,.<>/?";

/// Whether `c` belongs to [`LEADING_SPECIAL`].
pub fn is_leading_special(c: char) -> bool {
    LEADING_SPECIAL.contains(c)
}

/// Escape a character set for use inside a regex bracket class.
pub fn class_body(set: &str) -> String {
    let mut body = String::with_capacity(set.len() * 2);
    let mut buf = [0u8; 4];
    for c in set.chars() {
        body.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
    body
}
