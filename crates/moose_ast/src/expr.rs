//! Expressions: invocations, references and literals

use moose_tokens::position::{Position, Positioned};

/// A call, either written by the user or synthesized by the parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Invoke {
    pub name: String,
    /// Set for calls the parser creates for built in operations, like `return` or `postincrement`.
    /// These are not callable by name from user code.
    pub internal: bool,
    pub arguments: Vec<crate::ReturningSyntaxElement>,
    pub position: Position,
}

impl Invoke {
    /// A call written in the source
    pub fn call(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = crate::ReturningSyntaxElement>,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            internal: false,
            arguments: arguments.into_iter().collect(),
            position,
        }
    }

    /// A call synthesized by the parser
    pub fn internal(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = crate::ReturningSyntaxElement>,
        position: Position,
    ) -> Self {
        Self {
            internal: true,
            ..Self::call(name, arguments, position)
        }
    }
}

impl Positioned for Invoke {
    fn position(&self) -> Position {
        self.position
    }
}

/// A use of a named value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    pub value: String,
    pub position: Position,
}

impl Reference {
    pub fn new(value: impl Into<String>, position: Position) -> Self {
        Self {
            value: value.into(),
            position,
        }
    }
}

impl Positioned for Reference {
    fn position(&self) -> Position {
        self.position
    }
}

/// The type of a literal
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LiteralKind {
    String,
    Boolean,
    Null,
    Int,
    Float,
    Double,
}

/// A constant value written in the source.
///
/// `value` holds the normalized text: strings without quotes and with escapes resolved,
/// numbers without their type suffix and in decimal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: LiteralKind,
    pub value: String,
    pub position: Position,
}

impl Literal {
    pub fn new(kind: LiteralKind, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }
}

impl Positioned for Literal {
    fn position(&self) -> Position {
        self.position
    }
}
