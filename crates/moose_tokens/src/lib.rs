#![doc = include_str!("../README.md")]

use crate::diagnostic::{render, substitute_position, Style};
use crate::position::{Position, Positioned};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub mod diagnostic;
pub mod position;
pub mod token;

/// An error with a location in some source text.
///
/// The kind's [Display] output is used as a message template, so it may contain
/// `{position}`.
#[derive(Debug, Clone)]
pub struct SourceError<K> {
    kind: K,
    position: Position,
    file: Option<Arc<str>>,
    source_text: Arc<str>,
}

impl<K> SourceError<K> {
    pub fn new(kind: K, position: Position, source_text: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            position,
            file: None,
            source_text: source_text.into(),
        }
    }

    /// Sets the label of the file this error came from
    pub fn with_file(mut self, file: impl Into<Option<Arc<str>>>) -> Self {
        self.file = file.into();
        self
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn into_kind(self) -> K {
        self.kind
    }

    /// The label of the file this error came from, if any
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

impl<K: Display> SourceError<K> {
    /// The error message with its position filled in
    pub fn message(&self) -> String {
        substitute_position(&self.kind.to_string(), self.position)
    }

    /// Renders the full diagnostic, including source context
    pub fn render(&self, style: Style) -> String {
        render(
            &self.kind.to_string(),
            &self.source_text,
            self.position,
            style,
        )
    }
}

impl<K> Positioned for SourceError<K> {
    fn position(&self) -> Position {
        self.position
    }
}

impl<K: Display> Display for SourceError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let style = if f.alternate() {
            Style::Auto
        } else {
            Style::Plain
        };
        f.write_str(&self.render(style))
    }
}

impl<K: std::error::Error + 'static> std::error::Error for SourceError<K> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
