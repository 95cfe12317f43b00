use crate::lexer::ParseError;
use crate::parser::identifier::IdentifierError;
use moose_tokens::SourceError;

/// Represents an error occurring during parsing
pub type SyntaxError = SourceError<SyntaxErrorKind>;

/// The result of a parsing step
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("Unexpected keyword '{0}' at {{position}}")]
    UnexpectedKeyword(String),
    #[error("Functions cannot be declared as constant at {{position}}")]
    ConstantFunction,
    #[error("Constants must be initialized at {{position}}")]
    UninitializedConstant,
    #[error("Expected {0} at {{position}}")]
    Expected(&'static str),
    #[error("Invalid identifier '{identifier}' at {{position}}: {reason}")]
    InvalidIdentifier {
        identifier: String,
        reason: IdentifierError,
    },
    #[error("Could not determine literal type of '{0}' at {{position}}")]
    UnknownLiteral(String),
    #[error("Invalid number '{0}' at {{position}}")]
    InvalidNumber(String),
    #[error("Unexpected end of input at {{position}}")]
    UnexpectedEof,
    #[error("'{0}' statements are not supported yet at {{position}}")]
    UnsupportedStatement(String),
    #[error("Unexpected token '{0}' at {{position}}")]
    UnexpectedToken(String),
    #[error("Expected an expression at {{position}}")]
    NotAnExpression,
}

impl SyntaxErrorKind {
    /// Creates an [InvalidIdentifier](SyntaxErrorKind::InvalidIdentifier) error
    pub fn invalid_identifier(identifier: &str, reason: IdentifierError) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason,
        }
    }
}

/// Any error from turning source text into a syntax tree
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
