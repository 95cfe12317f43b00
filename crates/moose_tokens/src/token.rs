//! A lexical token from a source file

use crate::position::{Position, Positioned};
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source file.
///
/// The value is the raw source text of the token, so string literals keep their quotes and
/// escapes.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    position: Position,
    value: String,
}

impl Token {
    /// Creates a new token
    pub fn new(position: Position, value: impl Into<String>) -> Self {
        Self {
            position,
            value: value.into(),
        }
    }

    /// Gets the raw text of this token
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checks if this token's text is exactly `value`
    #[inline]
    pub fn is(&self, value: &str) -> bool {
        self.value == value
    }

    /// The number of characters in this token
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The position directly after this token
    pub fn end(&self) -> Position {
        self.position.advanced(self.len())
    }
}

impl Positioned for Token {
    fn position(&self) -> Position {
        self.position
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}@{}:{}",
            self.value, self.position.line, self.position.column
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
