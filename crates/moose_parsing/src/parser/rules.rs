//! Operator rules.
//!
//! An operator rule recognizes a pattern of tokens at the parser's position and turns it
//! into a syntax element. Rules are consulted in order and the first applicable one wins.

use crate::parser::error::{SyntaxError, SyntaxErrorKind, SyntaxResult};
use crate::parser::identifier::{is_valid_identifier, validate_identifier};
use moose_ast::expr::{Invoke, Reference};
use moose_ast::SyntaxElement;
use moose_tokens::position::{Position, Positioned};
use moose_tokens::token::Token;
use std::fmt::Debug;
use std::sync::Arc;

/// Recognizes and parses a pattern of tokens
pub trait OperatorRule: Debug + Send + Sync {
    /// The name of this rule, for logging
    fn name(&self) -> &str;

    /// Checks whether this rule matches the tokens at the start of the window
    fn is_applicable_here(&self, window: &TokenWindow<'_>) -> bool;

    /// Parses the matched tokens, returning the element and how many tokens it used.
    ///
    /// Only called after [is_applicable_here](OperatorRule::is_applicable_here) returned true.
    fn parse(&self, window: &TokenWindow<'_>) -> SyntaxResult<(SyntaxElement, usize)>;

    /// Whether the element this rule produces can be used as a value
    fn produces_expression(&self) -> bool;
}

/// A view of the tokens from the parser's position to the end of input
#[derive(Debug, Clone, Copy)]
pub struct TokenWindow<'a> {
    tokens: &'a [Token],
    source: &'a Arc<str>,
    file: Option<&'a Arc<str>>,
}

impl<'a> TokenWindow<'a> {
    pub(crate) fn new(
        tokens: &'a [Token],
        source: &'a Arc<str>,
        file: Option<&'a Arc<str>>,
    ) -> Self {
        Self {
            tokens,
            source,
            file,
        }
    }

    /// The number of tokens left
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Gets the token `n` places ahead
    pub fn get(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(n)
    }

    /// Gets the text of the token `n` places ahead
    pub fn value(&self, n: usize) -> Option<&'a str> {
        self.get(n).map(Token::value)
    }

    /// Checks if the token `n` places ahead is exactly `value`
    pub fn is(&self, n: usize, value: &str) -> bool {
        self.value(n) == Some(value)
    }

    /// The position of the token `n` places ahead, or just past the last token
    pub fn position(&self, n: usize) -> Position {
        match self.get(n) {
            Some(token) => token.position(),
            None => self
                .tokens
                .last()
                .map(Token::end)
                .unwrap_or_default(),
        }
    }

    /// Creates an error at the token `n` places ahead
    pub fn error(&self, n: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.position(n), self.source.clone()).with_file(self.file.cloned())
    }
}

/// `x++;`, `x--;`, `++x;` and `--x;` as a statement.
///
/// Produces an internal call of `postincrement`, `postdecrement`, `preincrement` or
/// `predecrement` with the variable as its only argument.
#[derive(Debug, Default)]
pub struct IncrementDecrementRule;

impl IncrementDecrementRule {
    const OPERATORS: [&'static str; 2] = ["++", "--"];

    fn is_operator(window: &TokenWindow<'_>, n: usize) -> bool {
        window
            .value(n)
            .is_some_and(|value| Self::OPERATORS.contains(&value))
    }

    fn operation(operator: &str, prefix: bool) -> &'static str {
        match (operator, prefix) {
            ("++", true) => "preincrement",
            ("++", false) => "postincrement",
            ("--", true) => "predecrement",
            _ => "postdecrement",
        }
    }
}

impl OperatorRule for IncrementDecrementRule {
    fn name(&self) -> &str {
        "increment/decrement"
    }

    fn is_applicable_here(&self, window: &TokenWindow<'_>) -> bool {
        if window.len() < 3 || !window.is(2, ";") {
            return false;
        }
        let variable = match (Self::is_operator(window, 0), Self::is_operator(window, 1)) {
            (true, false) => 1,
            (false, true) => 0,
            _ => return false,
        };
        window.value(variable).is_some_and(is_valid_identifier)
    }

    fn parse(&self, window: &TokenWindow<'_>) -> SyntaxResult<(SyntaxElement, usize)> {
        let prefix = Self::is_operator(window, 0);
        let (operator, variable) = if prefix { (0, 1) } else { (1, 0) };
        let operator = window.value(operator).unwrap_or_default();
        let variable_token = window
            .get(variable)
            .ok_or_else(|| window.error(variable, SyntaxErrorKind::UnexpectedEof))?;
        validate_identifier(variable_token.value()).map_err(|reason| {
            window.error(
                variable,
                SyntaxErrorKind::invalid_identifier(variable_token.value(), reason),
            )
        })?;

        let reference = Reference::new(variable_token.value(), variable_token.position());
        let invoke = Invoke::internal(
            Self::operation(operator, prefix),
            [reference.into()],
            window.position(0),
        );
        Ok((invoke.into(), 3))
    }

    fn produces_expression(&self) -> bool {
        true
    }
}

/// The rules every parser starts with, in the order they are consulted
pub fn default_rules() -> Vec<Box<dyn OperatorRule>> {
    vec![Box::new(IncrementDecrementRule)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::{parse_literal, ParserBuilder};
    use moose_ast::ReturningSyntaxElement;
    use test_log::test;

    fn with_window<R>(source: &str, f: impl FnOnce(&TokenWindow<'_>) -> R) -> R {
        let tokens = tokenize(source, None).unwrap().tokens;
        let source = Arc::from(source);
        f(&TokenWindow::new(&tokens, &source, None))
    }

    #[test]
    fn test_applicability() {
        let rule = IncrementDecrementRule;
        assert!(with_window("x++;", |w| rule.is_applicable_here(w)));
        assert!(with_window("--x;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("x++", |w| rule.is_applicable_here(w)));
        assert!(!with_window("x = 1;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("++--;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("x+ +;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("5++;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("\"s\"--;", |w| rule.is_applicable_here(w)));
        assert!(!with_window("++9x;", |w| rule.is_applicable_here(w)));
    }

    /// `<literal>++;` as a statement
    #[derive(Debug)]
    struct LiteralIncrementRule;

    impl OperatorRule for LiteralIncrementRule {
        fn name(&self) -> &str {
            "literal increment"
        }

        fn is_applicable_here(&self, window: &TokenWindow<'_>) -> bool {
            window.is(1, "++") && window.is(2, ";")
        }

        fn parse(&self, window: &TokenWindow<'_>) -> SyntaxResult<(SyntaxElement, usize)> {
            let literal = window
                .get(0)
                .ok_or_else(|| window.error(0, SyntaxErrorKind::UnexpectedEof))?;
            let value = parse_literal(literal).map_err(|kind| window.error(0, kind))?;
            let bump = Invoke::internal(
                "bump",
                [ReturningSyntaxElement::from(value)],
                window.position(0),
            );
            Ok((bump.into(), 3))
        }

        fn produces_expression(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_later_rule_claims_rejected_window() {
        let source = "5++;\nx++;";
        let tokens = tokenize(source, None).unwrap().tokens;
        let parsed = ParserBuilder::new()
            .rule(LiteralIncrementRule)
            .build(&tokens, source)
            .parse()
            .unwrap();
        let names = parsed
            .root
            .elements
            .iter()
            .map(|element| match element {
                SyntaxElement::Invoke(invoke) => invoke.name.as_str(),
                other => panic!("expected an invoke, got {other:?}"),
            })
            .collect::<Vec<_>>();
        assert_eq!(names, ["bump", "postincrement"]);
    }

    #[test]
    fn test_postincrement() {
        let (element, consumed) =
            with_window("x++; y", |w| IncrementDecrementRule.parse(w)).unwrap();
        assert_eq!(consumed, 3);
        let SyntaxElement::Invoke(invoke) = element else {
            panic!("expected an invoke, got {element:?}");
        };
        assert_eq!(invoke.name, "postincrement");
        assert!(invoke.internal);
        assert_eq!(invoke.position, Position::new(0, 0));
        assert_eq!(
            invoke.arguments,
            vec![ReturningSyntaxElement::from(Reference::new("x", Position::new(0, 0)))]
        );
    }

    #[test]
    fn test_predecrement() {
        let (element, _) = with_window("--count;", |w| IncrementDecrementRule.parse(w)).unwrap();
        let SyntaxElement::Invoke(invoke) = element else {
            panic!("expected an invoke, got {element:?}");
        };
        assert_eq!(invoke.name, "predecrement");
        assert_eq!(
            invoke.arguments,
            vec![ReturningSyntaxElement::from(Reference::new("count", Position::new(0, 2)))]
        );
    }

    #[test]
    fn test_invalid_variable() {
        let error = with_window("5++;", |w| IncrementDecrementRule.parse(w)).unwrap_err();
        assert!(matches!(error.kind(), SyntaxErrorKind::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_window_position_past_end() {
        with_window("ab cd", |w| {
            assert_eq!(w.position(1), Position::new(0, 3));
            assert_eq!(w.position(2), Position::new(0, 5));
        });
    }
}
