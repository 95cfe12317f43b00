#![doc = include_str!("../README.md")]

use moose_tokens::position::{Position, Positioned};

pub mod expr;
pub mod items;
pub mod statements;
pub mod translation_unit;

use expr::{Invoke, Literal, Reference};
use items::Declaration;
use statements::{Assignment, Statement};

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "element", rename_all = "lowercase"))]
pub enum SyntaxElement {
    Declaration(Declaration),
    Assignment(Assignment),
    Invoke(Invoke),
    Reference(Reference),
    Literal(Literal),
    Statement(Statement),
}

/// The syntax elements that produce a value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "element", rename_all = "lowercase"))]
pub enum ReturningSyntaxElement {
    Invoke(Invoke),
    Reference(Reference),
    Literal(Literal),
}

impl Positioned for SyntaxElement {
    fn position(&self) -> Position {
        match self {
            SyntaxElement::Declaration(d) => d.position(),
            SyntaxElement::Assignment(a) => a.position(),
            SyntaxElement::Invoke(i) => i.position(),
            SyntaxElement::Reference(r) => r.position(),
            SyntaxElement::Literal(l) => l.position(),
            SyntaxElement::Statement(s) => s.position(),
        }
    }
}

impl Positioned for ReturningSyntaxElement {
    fn position(&self) -> Position {
        match self {
            ReturningSyntaxElement::Invoke(i) => i.position(),
            ReturningSyntaxElement::Reference(r) => r.position(),
            ReturningSyntaxElement::Literal(l) => l.position(),
        }
    }
}

macro_rules! element_from {
    ($enum:ident: $($variant:ident),+) => {
        $(
            impl From<$variant> for $enum {
                fn from(value: $variant) -> Self {
                    $enum::$variant(value)
                }
            }
        )+
    };
}

element_from!(SyntaxElement: Declaration, Assignment, Invoke, Reference, Literal, Statement);
element_from!(ReturningSyntaxElement: Invoke, Reference, Literal);

impl From<ReturningSyntaxElement> for SyntaxElement {
    fn from(value: ReturningSyntaxElement) -> Self {
        match value {
            ReturningSyntaxElement::Invoke(i) => SyntaxElement::Invoke(i),
            ReturningSyntaxElement::Reference(r) => SyntaxElement::Reference(r),
            ReturningSyntaxElement::Literal(l) => SyntaxElement::Literal(l),
        }
    }
}

impl TryFrom<SyntaxElement> for ReturningSyntaxElement {
    /// Gives back the element if it does not produce a value
    type Error = SyntaxElement;

    fn try_from(value: SyntaxElement) -> Result<Self, Self::Error> {
        match value {
            SyntaxElement::Invoke(i) => Ok(ReturningSyntaxElement::Invoke(i)),
            SyntaxElement::Reference(r) => Ok(ReturningSyntaxElement::Reference(r)),
            SyntaxElement::Literal(l) => Ok(ReturningSyntaxElement::Literal(l)),
            other @ (SyntaxElement::Declaration(_)
            | SyntaxElement::Assignment(_)
            | SyntaxElement::Statement(_)) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::LiteralKind;
    use crate::statements::Statement;
    use test_log::test;

    #[test]
    fn test_returning_round_trip_through_syntax_element() {
        let reference = Reference::new("x", Position::new(3, 1));
        let element = SyntaxElement::from(ReturningSyntaxElement::from(reference.clone()));
        assert_eq!(element, SyntaxElement::Reference(reference.clone()));
        assert_eq!(
            ReturningSyntaxElement::try_from(element),
            Ok(ReturningSyntaxElement::Reference(reference))
        );
    }

    #[test]
    fn test_statement_is_not_returning() {
        let statement = SyntaxElement::from(Statement::Else {
            elements: vec![],
            position: Position::new(1, 2),
        });
        assert_eq!(statement.position(), Position::new(1, 2));
        assert!(ReturningSyntaxElement::try_from(statement).is_err());
    }

    #[test]
    fn test_position_dispatch() {
        let literal =
            SyntaxElement::from(Literal::new(LiteralKind::Null, "null", Position::new(9, 4)));
        assert_eq!(literal.position(), Position::new(9, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_shape() {
        use crate::items::{DeclarationKind, FunctionBody};
        let decl = SyntaxElement::from(Declaration {
            name: "main".to_string(),
            exported: true,
            position: Position::new(0, 0),
            kind: DeclarationKind::Function(FunctionBody {
                return_type: "int".to_string(),
                parameters: vec![],
                body: vec![],
            }),
        });
        let json = serde_json::to_value(&decl).unwrap();
        assert_eq!(json["element"], "declaration");
        assert_eq!(json["name"], "main");
        assert_eq!(json["type"], "function");
        assert_eq!(json["constant"], true);
        assert_eq!(json["value"]["returnType"], "int");
        assert_eq!(json["position"]["line"], 0);
    }
}
