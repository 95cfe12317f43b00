//! Renders positioned messages with the surrounding source lines.
//!
//! A rendered diagnostic looks like
//! ```text
//!
//! Unexpected keyword 'const' at line 1, column 6
//! 1 | int a = 1;
//! 2 | const const int x = 1;
//!   |       ^
//! 3 | int b = 2;
//! ```
//! The first line is blank, then the message with `{position}` substituted, the line before
//! the error, the offending line, a caret under the column and the line after. Every line is
//! right-trimmed and cut to [MAX_WIDTH] characters.

use crate::position::Position;
use owo_colors::{OwoColorize, Stream};
use std::borrow::Cow;

/// Maximum number of characters in a rendered line
pub const MAX_WIDTH: usize = 80;

/// The placeholder replaced by the formatted position
pub const POSITION_PLACEHOLDER: &str = "{position}";

/// How a diagnostic is styled
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Style {
    /// No escape codes
    #[default]
    Plain,
    /// Always emit ANSI escape codes
    Ansi,
    /// Emit ANSI escape codes only if stderr supports them
    Auto,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Paint {
    Normal,
    Dim,
    Highlight,
    Caret,
}

struct Segment<'a> {
    text: Cow<'a, str>,
    paint: Paint,
}

impl<'a> Segment<'a> {
    fn new(text: impl Into<Cow<'a, str>>, paint: Paint) -> Self {
        Self {
            text: text.into(),
            paint,
        }
    }
}

/// Replaces every `{position}` in `template` with `line L, column C`
pub fn substitute_position(template: &str, position: Position) -> String {
    template.replace(POSITION_PLACEHOLDER, &position.to_string())
}

/// Renders `message` against `source`, marking the token that starts at `position`.
///
/// Never fails: positions past the end of the source render an empty offending line.
pub fn render(message: &str, source: &str, position: Position, style: Style) -> String {
    let source = source.replace('\r', "").replace('\x1b', " ");
    let lines: Vec<&str> = source.split('\n').collect();
    let line = position.line;
    let width = (line + 2).to_string().len();

    let mut rendered = vec![finish(
        vec![Segment::new(substitute_position(message, position), Paint::Normal)],
        style,
    )];

    if line > 0 {
        if let Some(before) = lines.get(line - 1) {
            rendered.push(context_line(line - 1, before, width, style));
        }
    }

    let offending: Vec<char> = lines.get(line).copied().unwrap_or("").chars().collect();
    let start = position.column.min(offending.len());
    let end = offending[start..]
        .iter()
        .position(|c| c.is_whitespace())
        .map(|offset| start + offset)
        .unwrap_or(offending.len());
    rendered.push(finish(
        vec![
            Segment::new(gutter(Some(line), width), Paint::Dim),
            Segment::new(String::from_iter(&offending[..start]), Paint::Normal),
            Segment::new(String::from_iter(&offending[start..end]), Paint::Highlight),
            Segment::new(String::from_iter(&offending[end..]), Paint::Normal),
        ],
        style,
    ));
    rendered.push(finish(
        vec![
            Segment::new(gutter(None, width), Paint::Dim),
            Segment::new(" ".repeat(position.column), Paint::Normal),
            Segment::new("^", Paint::Caret),
        ],
        style,
    ));

    if let Some(after) = lines.get(line + 1) {
        rendered.push(context_line(line + 1, after, width, style));
    }

    format!("\n{}", rendered.join("\n"))
}

fn gutter(line: Option<usize>, width: usize) -> String {
    match line {
        Some(line) => format!("{:>width$} | ", line + 1),
        None => format!("{:>width$} | ", ""),
    }
}

fn context_line(line: usize, src: &str, width: usize, style: Style) -> String {
    finish(
        vec![Segment::new(format!("{}{}", gutter(Some(line), width), src), Paint::Dim)],
        style,
    )
}

/// Trims, truncates and then paints a line made of segments
fn finish(segments: Vec<Segment<'_>>, style: Style) -> String {
    let plain: String = segments.iter().map(|s| s.text.as_ref()).collect();
    let mut budget = plain.trim_end().chars().count().min(MAX_WIDTH);
    let mut out = String::new();
    for segment in segments {
        if budget == 0 {
            break;
        }
        let text: String = segment.text.chars().take(budget).collect();
        budget -= text.chars().count();
        if !text.is_empty() {
            out.push_str(&paint(&text, segment.paint, style));
        }
    }
    out
}

fn paint(text: &str, paint: Paint, style: Style) -> String {
    match (style, paint) {
        (Style::Plain, _) | (_, Paint::Normal) => text.to_string(),
        (Style::Ansi, Paint::Dim) => text.bright_black().to_string(),
        (Style::Ansi, Paint::Highlight) => text.red().to_string(),
        (Style::Ansi, Paint::Caret) => text.yellow().to_string(),
        (Style::Auto, Paint::Dim) => text
            .if_supports_color(Stream::Stderr, |t| t.bright_black())
            .to_string(),
        (Style::Auto, Paint::Highlight) => text
            .if_supports_color(Stream::Stderr, |t| t.red())
            .to_string(),
        (Style::Auto, Paint::Caret) => text
            .if_supports_color(Stream::Stderr, |t| t.yellow())
            .to_string(),
    }
}
