//! Assignments and control flow statements

use crate::{ReturningSyntaxElement, SyntaxElement};
use moose_tokens::position::{Position, Positioned};

/// Reassigns an already declared name
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub name: String,
    pub value: ReturningSyntaxElement,
    pub position: Position,
}

impl Positioned for Assignment {
    fn position(&self) -> Position {
        self.position
    }
}

/// A control flow statement.
///
/// The parser does not produce these yet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Statement {
    If {
        condition: ReturningSyntaxElement,
        elements: Vec<SyntaxElement>,
        position: Position,
    },
    Else {
        elements: Vec<SyntaxElement>,
        position: Position,
    },
    For {
        expression: ForExpression,
        elements: Vec<SyntaxElement>,
        position: Position,
    },
    While {
        condition: ReturningSyntaxElement,
        elements: Vec<SyntaxElement>,
        position: Position,
    },
}

impl Statement {
    /// The statements nested in this one
    pub fn elements(&self) -> &[SyntaxElement] {
        match self {
            Statement::If { elements, .. }
            | Statement::Else { elements, .. }
            | Statement::For { elements, .. }
            | Statement::While { elements, .. } => elements,
        }
    }
}

impl Positioned for Statement {
    fn position(&self) -> Position {
        match self {
            Statement::If { position, .. }
            | Statement::Else { position, .. }
            | Statement::For { position, .. }
            | Statement::While { position, .. } => *position,
        }
    }
}

/// The `(initial; condition; repeated)` header of a `for` statement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForExpression {
    pub initial: Box<SyntaxElement>,
    pub condition: ReturningSyntaxElement,
    pub repeated: Box<SyntaxElement>,
}
