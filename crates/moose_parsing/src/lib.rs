#![doc = include_str!("../README.md")]

use tracing::instrument;

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, LexErrorKind, Lexer, ParseError, Tokenized};
pub use parser::{
    parse, FrontendError, Parsed, Parser, ParserBuilder, ParserConfig, SyntaxError,
    SyntaxErrorKind,
};

/// Tokenizes and parses source text in one step.
///
/// Tokenizer errors are always fatal. Syntax errors are fatal unless
/// [recover_from_errors](ParserConfig::recover_from_errors) is set.
#[instrument(skip(source))]
pub fn parse_source(
    source: &str,
    file: Option<&str>,
    config: ParserConfig,
) -> Result<Parsed, FrontendError> {
    let Tokenized { file: _, tokens } = tokenize(source, file)?;
    let mut builder = ParserBuilder::new().config(config);
    if let Some(file) = file {
        builder = builder.file(file);
    }
    Ok(builder.build(&tokens, source).parse()?)
}
