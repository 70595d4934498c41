//! Inline elements for paragraph content
//!
//! Letters only need plain and bold runs, but the nesting shape mirrors
//! other document models so renderers can walk it uniformly.

use serde::{Deserialize, Serialize};

/// Inline-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text content
    Text(String),
    /// Formatted content
    Format(FormatType, Box<Inline>),
    /// A span containing multiple inline elements
    Span(Vec<Inline>),
}

/// Text formatting types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    /// Bold text
    Bold,
}

impl Inline {
    /// Plain text run
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Bold text run
    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Format(FormatType::Bold, Box::new(Inline::Text(text.into())))
    }

    /// Concatenated text of this element, without markup
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            Inline::Format(_, inner) => inner.plain_text(),
            Inline::Span(inlines) => inlines.iter().map(Inline::plain_text).collect(),
        }
    }

    /// Whether any part of this element is bold
    pub fn is_bold(&self) -> bool {
        match self {
            Inline::Text(_) => false,
            Inline::Format(FormatType::Bold, _) => true,
            Inline::Span(inlines) => inlines.iter().any(Inline::is_bold),
        }
    }
}
