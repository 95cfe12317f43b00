//! Declarations of variables, constants and functions

use crate::{ReturningSyntaxElement, SyntaxElement};
use moose_tokens::position::{Position, Positioned};

/// The type name every function declaration reports
pub const FUNCTION_TYPE: &str = "function";

/// A binding of a name to a type and maybe a value.
///
/// Serialized flat as `{name, constant, exported, type, value, position}`, with a function's
/// body as its `value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "serialized::DeclarationRepr", try_from = "serialized::DeclarationRepr")
)]
pub struct Declaration {
    /// The declared name. For functions this is the callable's name.
    pub name: String,
    pub exported: bool,
    pub position: Position,
    pub kind: DeclarationKind,
}

/// What kind of declaration this is, and the data specific to it
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Function(FunctionBody),
    Constant {
        ty: String,
        value: ReturningSyntaxElement,
    },
    /// A mutable declaration, possibly uninitialized
    Default {
        ty: String,
        value: Option<ReturningSyntaxElement>,
    },
}

impl Declaration {
    /// Functions and constants can not be reassigned
    pub fn is_constant(&self) -> bool {
        matches!(
            self.kind,
            DeclarationKind::Function(_) | DeclarationKind::Constant { .. }
        )
    }

    /// The declared type, which is [FUNCTION_TYPE] for functions
    pub fn type_name(&self) -> &str {
        match &self.kind {
            DeclarationKind::Function(_) => FUNCTION_TYPE,
            DeclarationKind::Constant { ty, .. } | DeclarationKind::Default { ty, .. } => ty,
        }
    }

    /// The initial value of a variable or constant
    pub fn value(&self) -> Option<&ReturningSyntaxElement> {
        match &self.kind {
            DeclarationKind::Function(_) => None,
            DeclarationKind::Constant { value, .. } => Some(value),
            DeclarationKind::Default { value, .. } => value.as_ref(),
        }
    }

    pub fn function(&self) -> Option<&FunctionBody> {
        match &self.kind {
            DeclarationKind::Function(body) => Some(body),
            _ => None,
        }
    }
}

impl Positioned for Declaration {
    fn position(&self) -> Position {
        self.position
    }
}

/// The signature and body of a function
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FunctionBody {
    pub return_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "arguments"))]
    pub parameters: Vec<FunctionArgument>,
    #[cfg_attr(feature = "serde", serde(rename = "elements"))]
    pub body: Vec<SyntaxElement>,
}

/// A single function parameter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionArgument {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    pub position: Position,
}

impl Positioned for FunctionArgument {
    fn position(&self) -> Position {
        self.position
    }
}

#[cfg(feature = "serde")]
mod serialized {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    pub(super) struct DeclarationRepr {
        name: String,
        constant: bool,
        exported: bool,
        #[serde(rename = "type")]
        ty: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<DeclarationValue>,
        position: Position,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum DeclarationValue {
        Function(FunctionBody),
        Value(ReturningSyntaxElement),
    }

    impl From<Declaration> for DeclarationRepr {
        fn from(decl: Declaration) -> Self {
            let constant = decl.is_constant();
            let ty = decl.type_name().to_string();
            let value = match decl.kind {
                DeclarationKind::Function(body) => Some(DeclarationValue::Function(body)),
                DeclarationKind::Constant { value, .. } => Some(DeclarationValue::Value(value)),
                DeclarationKind::Default { value, .. } => value.map(DeclarationValue::Value),
            };
            Self {
                name: decl.name,
                constant,
                exported: decl.exported,
                ty,
                value,
                position: decl.position,
            }
        }
    }

    impl TryFrom<DeclarationRepr> for Declaration {
        type Error = String;

        fn try_from(repr: DeclarationRepr) -> Result<Self, Self::Error> {
            let kind = match (repr.constant, repr.value) {
                (true, Some(DeclarationValue::Function(body))) if repr.ty == FUNCTION_TYPE => {
                    DeclarationKind::Function(body)
                }
                (true, Some(DeclarationValue::Value(value))) => DeclarationKind::Constant {
                    ty: repr.ty,
                    value,
                },
                (false, Some(DeclarationValue::Value(value))) => DeclarationKind::Default {
                    ty: repr.ty,
                    value: Some(value),
                },
                (false, None) => DeclarationKind::Default {
                    ty: repr.ty,
                    value: None,
                },
                (true, None) => return Err(format!("constant {:?} has no value", repr.name)),
                (_, Some(DeclarationValue::Function(_))) => {
                    return Err(format!("{:?} has a function body but is not a function", repr.name))
                }
            };
            Ok(Declaration {
                name: repr.name,
                exported: repr.exported,
                position: repr.position,
                kind,
            })
        }
    }
}
