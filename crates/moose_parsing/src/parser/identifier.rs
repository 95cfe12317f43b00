//! Validation of names

use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z$#@][A-Za-z$#@0-9_]*$").expect("identifier pattern is valid")
});

/// Why a name is not a valid identifier
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifiers can not be empty")]
    Empty,
    #[error("identifiers can not start with a digit")]
    LeadingDigit,
    #[error("identifiers may only contain letters, digits, '_', '$', '#' and '@'")]
    InvalidCharacters,
}

/// Checks that `name` starts with a letter, `$`, `#` or `@` and otherwise only contains
/// letters, digits, `_`, `$`, `#` and `@`.
pub fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    match name.chars().next() {
        None => Err(IdentifierError::Empty),
        Some(c) if c.is_ascii_digit() => Err(IdentifierError::LeadingDigit),
        Some(_) if IDENTIFIER.is_match(name) => Ok(()),
        Some(_) => Err(IdentifierError::InvalidCharacters),
    }
}

pub fn is_valid_identifier(name: &str) -> bool {
    validate_identifier(name).is_ok()
}
