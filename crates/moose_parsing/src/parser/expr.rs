//! Expressions

use crate::parser::constants::parse_literal;
use crate::parser::error::{SyntaxErrorKind, SyntaxResult};
use crate::parser::identifier::is_valid_identifier;
use crate::parser::Parser;
use moose_ast::expr::{Invoke, Reference};
use moose_ast::ReturningSyntaxElement;
use moose_tokens::position::Positioned;

impl<'t> Parser<'t> {
    /// Parses something that produces a value.
    ///
    /// In order, tries the operator rules that produce values, a parenthesized expression, a
    /// call, a literal and finally a reference.
    pub(crate) fn parse_expression(&mut self) -> SyntaxResult<ReturningSyntaxElement> {
        if let Some(element) = self.apply_rule(true)? {
            return ReturningSyntaxElement::try_from(element).map_err(|element| {
                self.error_at(SyntaxErrorKind::NotAnExpression, element.position())
            });
        }
        let Some(token) = self.peek(0) else {
            return Err(self.error(SyntaxErrorKind::UnexpectedEof));
        };
        if token.is("(") {
            self.cursor += 1;
            let inner = self.parse_expression()?;
            self.expect(")", "')'")?;
            return Ok(inner);
        }
        if self.peek_is(1, "(") {
            return self.parse_call().map(ReturningSyntaxElement::from);
        }

        self.cursor += 1;
        match parse_literal(token) {
            Ok(literal) => Ok(literal.into()),
            Err(_) if is_valid_identifier(token.value()) => {
                Ok(Reference::new(token.value(), token.position()).into())
            }
            Err(kind) => Err(self.error_at(kind, token.position())),
        }
    }

    /// Parses `name(argument, ...)`
    fn parse_call(&mut self) -> SyntaxResult<Invoke> {
        let name = self.identifier()?;
        self.expect("(", "'('")?;
        let mut arguments = vec![];
        if self.consume_if(")").is_none() {
            loop {
                arguments.push(self.parse_expression()?);
                if self.consume_if(",").is_some() {
                    continue;
                }
                self.expect(")", "',' or ')'")?;
                break;
            }
        }
        Ok(Invoke::call(name.value(), arguments, name.position()))
    }
}
