//! nom parsers for the individual token shapes.
//!
//! Every parser recognizes a token at the start of its input and returns the matched slice.

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_while1};
use nom::character::complete::{char, none_of, one_of, satisfy};
use nom::combinator::{not, recognize};
use nom::error::{context, VerboseError};
use nom::multi::many0_count;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

pub(crate) type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Every operator and punctuation token. Longer tokens are always tried first, so `==` wins
/// over `=` and `[]` wins over `[`.
pub const SPECIAL_TOKENS: &[&str] = &[
    "[]", "(", ")", "{", "}", "[", "]", "<<", ">>", "==", "!=", "<=", ">=", "<", ">", "!", "&&",
    "||", "^^", "++", "--", "=", ".", "%", "-", "+", "/", "**", "*", "^", "&", "~", "|", ";",
    ",", ":",
];

/// Matches the longest special token at the start of the input
pub fn special_token(src: &str) -> Result<&str> {
    context(
        "special token",
        alt((
            alt((
                tag("[]"),
                tag("<<"),
                tag(">>"),
                tag("=="),
                tag("!="),
                tag("<="),
                tag(">="),
                tag("&&"),
                tag("||"),
                tag("^^"),
                tag("++"),
                tag("--"),
                tag("**"),
            )),
            recognize(one_of("(){}[]<>!=.%-+/*^&~|;,:")),
        )),
    )(src)
}

fn quoted<'a>(quote: char, stop: &'static str) -> impl FnMut(&'a str) -> Result<'a, &'a str> {
    recognize(delimited(
        char(quote),
        many0_count(alt((is_not(stop), recognize(pair(char('\\'), none_of("\n")))))),
        char(quote),
    ))
}

/// Matches a quoted string, including both quotes.
///
/// Fails if the input ends or a newline appears before the closing quote.
pub fn string_literal(src: &str) -> Result<&str> {
    context(
        "string",
        alt((quoted('"', "\"\\\n"), quoted('\'', "'\\\n"))),
    )(src)
}

/// Matches a `//` comment up to, not including, the end of its line
pub fn line_comment(src: &str) -> Result<&str> {
    context(
        "line comment",
        recognize(preceded(tag("//"), take_till(|c| c == '\n'))),
    )(src)
}

/// Matches any whitespace and comments, possibly nothing
pub fn insignificant(src: &str) -> Result<&str> {
    context(
        "insignificant",
        recognize(many0_count(alt((
            take_while1(char::is_whitespace),
            line_comment,
        )))),
    )(src)
}

/// Matches a run of ordinary characters, ending at whitespace or the start of a special token.
///
/// The first character is taken even if a special token starts there.
pub fn free_form(src: &str) -> Result<&str> {
    let ordinary = || satisfy(|c| !c.is_whitespace());
    context(
        "free form",
        recognize(pair(
            ordinary(),
            many0_count(preceded(not(special_token), ordinary())),
        )),
    )(src)
}
