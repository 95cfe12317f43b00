//! Parser used for creating the syntax tree from tokens

use crate::parser::identifier::validate_identifier;
use crate::parser::keywords::Keyword;
use crate::parser::rules::{default_rules, OperatorRule, TokenWindow};
use moose_ast::translation_unit::RootElement;
use moose_ast::SyntaxElement;
use moose_tokens::diagnostic::Style;
use moose_tokens::position::{Position, Positioned};
use moose_tokens::token::Token;
use std::sync::Arc;
use tracing::{debug, error, instrument, trace};

mod constants;
pub mod error;
mod expr;
pub mod identifier;
mod items;
pub mod keywords;
pub mod rules;
mod statements;

pub use constants::parse_literal;
pub use error::{FrontendError, SyntaxError, SyntaxErrorKind, SyntaxResult};

/// Settings that change how a [Parser] behaves
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Record errors and continue with the next statement instead of stopping
    pub recover_from_errors: bool,
    /// Log recovered errors with their source context
    pub verbose: bool,
}

/// The result of a successful parse
#[derive(Debug)]
pub struct Parsed {
    pub root: RootElement,
    /// Errors the parser recovered from. Always empty unless
    /// [recover_from_errors](ParserConfig::recover_from_errors) is set.
    pub errors: Vec<SyntaxError>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Builder for creating a [Parser] instance.
#[derive(Debug)]
pub struct ParserBuilder {
    file: Option<Arc<str>>,
    config: ParserConfig,
    rules: Vec<Box<dyn OperatorRule>>,
}

impl ParserBuilder {
    /// Creates a builder with default settings and the [default rules](default_rules)
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label of the file being parsed
    pub fn file(mut self, file: impl AsRef<str>) -> Self {
        self.file = Some(Arc::from(file.as_ref()));
        self
    }

    pub fn config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn recover_from_errors(mut self, recover: bool) -> Self {
        self.config.recover_from_errors = recover;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Adds an operator rule, consulted after the ones already registered
    pub fn rule<R: OperatorRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Builds a [Parser] over `tokens`, which were created from `source`
    pub fn build<'t>(self, tokens: &'t [Token], source: &str) -> Parser<'t> {
        Parser {
            tokens,
            cursor: 0,
            source: Arc::from(source.replace('\r', "")),
            file: self.file,
            config: self.config,
            rules: self.rules,
            errors: vec![],
        }
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self {
            file: None,
            config: ParserConfig::default(),
            rules: default_rules(),
        }
    }
}

/// Turns a sequence of tokens into a [RootElement].
///
/// Parsing is single pass, with fixed lookahead and no backtracking.
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    source: Arc<str>,
    file: Option<Arc<str>>,
    config: ParserConfig,
    rules: Vec<Box<dyn OperatorRule>>,
    errors: Vec<SyntaxError>,
}

impl<'t> Parser<'t> {
    /// Creates the default ParserBuilder
    #[inline]
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses every token into top level elements
    #[instrument(skip_all, fields(file = ?self.file))]
    pub fn parse(mut self) -> SyntaxResult<Parsed> {
        let mut elements = vec![];
        while self.peek(0).is_some() {
            let start = self.cursor;
            match self.parse_element() {
                Ok(Some(element)) => {
                    trace!("parsed {element:?}");
                    elements.push(element);
                }
                Ok(None) => {}
                Err(e) if self.config.recover_from_errors => {
                    self.report(&e);
                    self.errors.push(e);
                    self.synchronize(start);
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            "parsed {} top level elements with {} recovered errors",
            elements.len(),
            self.errors.len()
        );
        Ok(Parsed {
            root: RootElement::new(self.file.as_deref().map(str::to_string), elements),
            errors: self.errors,
        })
    }

    /// Parses a single element, or nothing for an empty statement.
    pub(crate) fn parse_element(&mut self) -> SyntaxResult<Option<SyntaxElement>> {
        let Some(token) = self.peek(0) else {
            return Ok(None);
        };
        if token.is(";") {
            self.cursor += 1;
            return Ok(None);
        }
        if let Some(element) = self.apply_rule(false)? {
            return Ok(Some(element));
        }
        match Keyword::of(token) {
            Some(Keyword::Return) => {
                return self.parse_return().map(|invoke| Some(invoke.into()));
            }
            Some(keyword) if keyword.is_statement() => {
                let kind = SyntaxErrorKind::UnsupportedStatement(keyword.to_string());
                return Err(self.error(kind));
            }
            _ => {}
        }

        let element = if self.peek_is(1, "(") {
            let call = self.parse_expression()?;
            self.finish_statement()?;
            call.into()
        } else if self.is_declaration() {
            self.parse_declaration()?.into()
        } else if Keyword::of(token) == Some(Keyword::Func) {
            self.parse_function()?.into()
        } else if self.peek_is(1, "=") {
            self.parse_assignment()?.into()
        } else {
            return Err(self.error(SyntaxErrorKind::UnexpectedToken(token.value().to_string())));
        };
        Ok(Some(element))
    }

    /// Consults the operator rules at the current position
    pub(crate) fn apply_rule(
        &mut self,
        expression_only: bool,
    ) -> SyntaxResult<Option<SyntaxElement>> {
        let window = TokenWindow::new(
            &self.tokens[self.cursor..],
            &self.source,
            self.file.as_ref(),
        );
        let Some(rule) = self
            .rules
            .iter()
            .filter(|rule| !expression_only || rule.produces_expression())
            .find(|rule| rule.is_applicable_here(&window))
        else {
            return Ok(None);
        };
        trace!("applying operator rule {:?}", rule.name());
        let (element, consumed) = rule.parse(&window)?;
        self.cursor += consumed.max(1).min(window.len());
        Ok(Some(element))
    }

    /// Requires the statement just parsed to end with `;`.
    ///
    /// Nothing is consumed if the last consumed token already was the `;`.
    pub(crate) fn finish_statement(&mut self) -> SyntaxResult<()> {
        if self.previous().is_some_and(|token| token.is(";")) {
            return Ok(());
        }
        self.expect(";", "';'").map(|_| ())
    }

    /// Skips past the statement starting at `start` after an error
    fn synchronize(&mut self, start: usize) {
        self.cursor = start;
        let mut depth = 0_usize;
        while let Some(token) = self.peek(0) {
            self.cursor += 1;
            match token.value() {
                "{" => depth += 1,
                "}" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                ";" if depth == 0 => break,
                _ => {}
            }
        }
        trace!("resuming at token {}", self.cursor);
    }

    fn report(&self, e: &SyntaxError) {
        if self.config.verbose {
            error!("{}", e.render(Style::Auto));
        } else {
            error!("{}", e.message());
        }
    }

    /// Gets the token `n` places ahead without consuming anything
    pub(crate) fn peek(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.cursor + n)
    }

    pub(crate) fn peek_is(&self, n: usize, value: &str) -> bool {
        self.peek(n).is_some_and(|token| token.is(value))
    }

    pub(crate) fn peek_keyword(&self, n: usize) -> Option<Keyword> {
        self.peek(n).and_then(Keyword::of)
    }

    fn previous(&self) -> Option<&'t Token> {
        self.cursor.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Consumes the current token
    pub(crate) fn consume(&mut self) -> SyntaxResult<&'t Token> {
        let token = self
            .peek(0)
            .ok_or_else(|| self.error(SyntaxErrorKind::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Consumes the current token only if it is exactly `value`
    pub(crate) fn consume_if(&mut self, value: &str) -> Option<&'t Token> {
        let token = self.peek(0).filter(|token| token.is(value))?;
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the current token, failing with [Expected](SyntaxErrorKind::Expected) if it is
    /// not `value`
    pub(crate) fn expect(
        &mut self,
        value: &str,
        expected: &'static str,
    ) -> SyntaxResult<&'t Token> {
        self.consume_if(value)
            .ok_or_else(|| self.error(SyntaxErrorKind::Expected(expected)))
    }

    /// Consumes a token that must be a valid identifier
    pub(crate) fn identifier(&mut self) -> SyntaxResult<&'t Token> {
        let token = self.consume()?;
        validate_identifier(token.value()).map_err(|reason| {
            self.error_at(
                SyntaxErrorKind::invalid_identifier(token.value(), reason),
                token.position(),
            )
        })?;
        Ok(token)
    }

    /// Creates an error at the current token, or just past the last token at the end of input
    pub(crate) fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        self.error_at(kind, self.position())
    }

    /// The position of the current token, or just past the last token at the end of input
    pub(crate) fn position(&self) -> Position {
        match self.peek(0) {
            Some(token) => token.position(),
            None => self.tokens.last().map(Token::end).unwrap_or_default(),
        }
    }

    pub(crate) fn error_at(&self, kind: SyntaxErrorKind, position: Position) -> SyntaxError {
        SyntaxError::new(kind, position, self.source.clone()).with_file(self.file.clone())
    }
}

/// Parses tokens into a [RootElement].
///
/// With `recover_from_errors`, malformed statements are skipped and their errors collected
/// in [Parsed::errors]. Otherwise the first error is returned.
pub fn parse(
    tokens: &[Token],
    source: &str,
    file: Option<&str>,
    recover_from_errors: bool,
) -> SyntaxResult<Parsed> {
    let mut builder = ParserBuilder::new().recover_from_errors(recover_from_errors);
    if let Some(file) = file {
        builder = builder.file(file);
    }
    builder.build(tokens, source).parse()
}
