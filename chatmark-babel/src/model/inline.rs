//! Typed inline display elements.

use serde::{Deserialize, Serialize};

/// A classified piece of display content produced from wire markup.
///
/// Styled variants hold the unmarked inner text. Nesting is not modeled: the only
/// combined style is [`InlineElement::BoldItalic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineElement {
    PlainText { text: String },
    Bold { text: String },
    Italic { text: String },
    Strike { text: String },
    Code { text: String },
    BoldItalic { text: String },
    Link { url: String, display_text: String },
}

impl InlineElement {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineElement::PlainText { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        InlineElement::Bold { text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        InlineElement::Italic { text: text.into() }
    }

    pub fn strike(text: impl Into<String>) -> Self {
        InlineElement::Strike { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        InlineElement::Code { text: text.into() }
    }

    pub fn bold_italic(text: impl Into<String>) -> Self {
        InlineElement::BoldItalic { text: text.into() }
    }

    /// A link whose display text is the url itself.
    pub fn link(url: impl Into<String>) -> Self {
        let url = url.into();
        InlineElement::Link {
            display_text: url.clone(),
            url,
        }
    }

    /// Element kind as a lower-case tag name (`bold`, `bold-italic`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            InlineElement::PlainText { .. } => "text",
            InlineElement::Bold { .. } => "bold",
            InlineElement::Italic { .. } => "italic",
            InlineElement::Strike { .. } => "strike",
            InlineElement::Code { .. } => "code",
            InlineElement::BoldItalic { .. } => "bold-italic",
            InlineElement::Link { .. } => "link",
        }
    }

    /// The visible text of the element.
    pub fn text(&self) -> &str {
        match self {
            InlineElement::PlainText { text }
            | InlineElement::Bold { text }
            | InlineElement::Italic { text }
            | InlineElement::Strike { text }
            | InlineElement::Code { text }
            | InlineElement::BoldItalic { text } => text,
            InlineElement::Link { display_text, .. } => display_text,
        }
    }
}

/// Anchor attributes attached to [`InlineElement::Link`] when it is written out.
///
/// Links open outside the console and carry a test hook attribute for UI automation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributes {
    pub target: String,
    pub rel: String,
    pub test_id: String,
}

impl Default for LinkAttributes {
    fn default() -> Self {
        LinkAttributes {
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
            test_id: "messageLink".to_string(),
        }
    }
}
