//! Literal values

use crate::parser::error::SyntaxErrorKind;
use crate::parser::keywords::Keyword;
use moose_ast::expr::{Literal, LiteralKind};
use moose_tokens::position::Positioned;
use moose_tokens::token::Token;

/// Determines the literal a token spells.
///
/// Hexadecimal (`0x`) and binary (`0b`) integers are converted to their decimal text. A
/// trailing `f` or `d` on an integer makes it a float or a double, and the suffix is dropped.
pub fn parse_literal(token: &Token) -> Result<Literal, SyntaxErrorKind> {
    let value = token.value();
    let (kind, text) = match value.chars().next() {
        Some(quote @ ('"' | '\'')) => (LiteralKind::String, unescape(unquote(value, quote))),
        Some(c) if c.is_ascii_digit() => number(value)?,
        _ => match Keyword::of(token) {
            Some(Keyword::True | Keyword::False) => (LiteralKind::Boolean, value.to_string()),
            Some(Keyword::Null) => (LiteralKind::Null, value.to_string()),
            _ => return Err(SyntaxErrorKind::UnknownLiteral(value.to_string())),
        },
    };
    Ok(Literal::new(kind, text, token.position()))
}

fn unquote(value: &str, quote: char) -> &str {
    let inner = &value[quote.len_utf8()..];
    inner.strip_suffix(quote).unwrap_or(inner)
}

fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

fn number(value: &str) -> Result<(LiteralKind, String), SyntaxErrorKind> {
    let radix = [("0x", 16), ("0X", 16), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| value.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        return u64::from_str_radix(digits, radix)
            .map(|parsed| (LiteralKind::Int, parsed.to_string()))
            .map_err(|_| SyntaxErrorKind::InvalidNumber(value.to_string()));
    }

    let (digits, kind) = match value.strip_suffix(['f', 'F']) {
        Some(digits) => (digits, LiteralKind::Float),
        None => match value.strip_suffix(['d', 'D']) {
            Some(digits) => (digits, LiteralKind::Double),
            None => (value, LiteralKind::Int),
        },
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(SyntaxErrorKind::UnknownLiteral(value.to_string()));
    }
    Ok((kind, digits.to_string()))
}
