//! The root of a parsed source unit

use crate::SyntaxElement;

/// Everything parsed from one source unit
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootElement {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub file: Option<String>,
    pub elements: Vec<SyntaxElement>,
}

impl RootElement {
    /// Creates a new root element
    pub fn new(file: Option<String>, elements: Vec<SyntaxElement>) -> Self {
        Self { file, elements }
    }
}
