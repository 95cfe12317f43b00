//! Reserved words

use moose_tokens::token::Token;
use std::str::FromStr;

/// A word with special meaning to the parser
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Export,
    Const,
    Func,
    Return,
    True,
    False,
    Null,
    If,
    Else,
    For,
    While,
}

impl Keyword {
    /// The keyword a token spells, if any
    pub fn of(token: &Token) -> Option<Self> {
        Self::from_str(token.value()).ok()
    }

    /// Control flow keywords the parser recognizes but can not parse yet
    pub fn is_statement(self) -> bool {
        matches!(self, Keyword::If | Keyword::Else | Keyword::For | Keyword::While)
    }

    pub fn is_modifier(self) -> bool {
        matches!(self, Keyword::Export | Keyword::Const)
    }
}
