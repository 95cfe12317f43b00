//! Responsible with converting source text into a token stream

use crate::lexer::token_parsing::{free_form, insignificant, special_token, string_literal};
use moose_tokens::position::Position;
use moose_tokens::token::Token;
use moose_tokens::SourceError;
use nom::branch::alt;
use nom::error::VerboseError;
use nom::Finish;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, trace};

mod token_parsing;

pub use token_parsing::SPECIAL_TOKENS;

/// An error produced while tokenizing
pub type ParseError = SourceError<LexErrorKind>;

type LexResult<T> = Result<T, ParseError>;

/// [ParseError] kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unterminated string literal at {{position}}")]
    UnterminatedString,
    #[error("Could not tokenize {0:?} at {{position}}")]
    Unrecognized(String),
}

impl From<VerboseError<&str>> for LexErrorKind {
    fn from(e: VerboseError<&str>) -> Self {
        let rest = e.errors.first().map(|(rest, _)| *rest).unwrap_or_default();
        Self::Unrecognized(rest.chars().take_while(|c| !c.is_whitespace()).collect())
    }
}

/// The tokens of one source unit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenized {
    pub file: Option<String>,
    pub tokens: Vec<Token>,
}

/// Responsible with converting source text into a token stream.
///
/// Carriage returns are dropped before scanning. Whitespace and `//` comments separate
/// tokens but never become tokens themselves. After the first error the lexer yields nothing
/// more.
#[derive(Debug)]
pub struct Lexer {
    offset: usize,
    line: usize,
    column: usize,
    source: Arc<str>,
    file: Option<Arc<str>>,
    poisoned: bool,
}

impl Lexer {
    /// Creates a new lexer
    pub fn new(source: &str, file: Option<&str>) -> Self {
        let source: Arc<str> = Arc::from(source.replace('\r', ""));
        Self {
            offset: 0,
            line: 0,
            column: 0,
            source,
            file: file.map(Arc::from),
            poisoned: false,
        }
    }

    /// The source text being tokenized, without carriage returns
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Moves past `consumed`, which must start at the current offset
    fn advance(&mut self, consumed: &str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.offset += consumed.len();
    }

    fn error(&self, kind: LexErrorKind, position: Position) -> ParseError {
        ParseError::new(kind, position, self.source.clone()).with_file(self.file.clone())
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        let source = Arc::clone(&self.source);
        if let Ok((_, skipped)) = insignificant(&source[self.offset..]).finish() {
            self.advance(skipped);
        }
        let rest = &source[self.offset..];
        if rest.is_empty() {
            return Ok(None);
        }
        let position = Position::new(self.line, self.column);
        let (_, value) = if rest.starts_with(['"', '\'']) {
            string_literal(rest)
                .finish()
                .map_err(|_| self.error(LexErrorKind::UnterminatedString, position))?
        } else {
            alt((special_token, free_form))(rest)
                .finish()
                .map_err(|e| self.error(e.into(), position))?
        };
        self.advance(value);
        trace!("lexed {value:?} at {position}");
        Ok(Some(Token::new(position, value)))
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        match self.next_token() {
            Ok(option) => option.map(Ok),
            Err(e) => {
                self.poisoned = true;
                Some(Err(e))
            }
        }
    }
}

/// Splits source text into positioned tokens.
///
/// Fails on the first string literal missing its closing quote.
#[instrument(skip(source))]
pub fn tokenize(source: &str, file: Option<&str>) -> Result<Tokenized, ParseError> {
    let tokens = Lexer::new(source, file).collect::<LexResult<Vec<_>>>()?;
    debug!("tokenized {} tokens", tokens.len());
    Ok(Tokenized {
        file: file.map(str::to_string),
        tokens,
    })
}
