//! Rich document model.
//!
//! The serde representation follows the raw content state emitted by the editor:
//!
//! ```text
//! {"blocks": [{"text": "hello", "inlineStyleRanges": [{"style": "BOLD", "offset": 0, "length": 5}]}]}
//! ```
//!
//! Extra editor fields (`key`, `type`, `entityRanges`, `entityMap`, ...) are ignored on input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document made of ordered blocks (one block per line of wire text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichDocument {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl RichDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        RichDocument { blocks }
    }

    /// Build an unstyled document from plain lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RichDocument {
            blocks: lines.into_iter().map(Block::plain).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Texts of all blocks, without styling.
    pub fn texts(&self) -> Vec<&str> {
        self.blocks.iter().map(|block| block.text.as_str()).collect()
    }
}

/// A single line of editor content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub text: String,
    /// Style ranges in the order the editor recorded them. Never sorted.
    #[serde(default, rename = "inlineStyleRanges")]
    pub style_ranges: Vec<StyleRange>,
}

impl Block {
    pub fn new(text: impl Into<String>, style_ranges: Vec<StyleRange>) -> Self {
        Block {
            text: text.into(),
            style_ranges,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Block::new(text, Vec::new())
    }

    /// Builder-style helper for tests and callers assembling blocks by hand.
    pub fn with_style(mut self, style: StyleType, offset: usize, length: usize) -> Self {
        self.style_ranges.push(StyleRange::new(style, offset, length));
        self
    }

    /// Length of the text in chars, the unit offsets are expressed in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A formatting span over a block's text. `offset` and `length` count chars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub style: StyleType,
    pub offset: usize,
    pub length: usize,
}

impl StyleRange {
    pub fn new(style: StyleType, offset: usize, length: usize) -> Self {
        StyleRange {
            style,
            offset,
            length,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Inline style names used by the editor.
///
/// Only [`StyleType::Bold`] and [`StyleType::Italic`] have a wire marker; every other
/// style survives in the document model but is dropped when writing wire text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleType {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Other(String),
}

impl StyleType {
    pub fn as_str(&self) -> &str {
        match self {
            StyleType::Bold => "BOLD",
            StyleType::Italic => "ITALIC",
            StyleType::Underline => "UNDERLINE",
            StyleType::Strikethrough => "STRIKETHROUGH",
            StyleType::Code => "CODE",
            StyleType::Other(name) => name,
        }
    }

    /// The wire marker written around a range of this style, if any.
    pub fn wire_marker(&self) -> Option<char> {
        match self {
            StyleType::Bold => Some('*'),
            StyleType::Italic => Some('_'),
            _ => None,
        }
    }
}

impl From<String> for StyleType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "BOLD" => StyleType::Bold,
            "ITALIC" => StyleType::Italic,
            "UNDERLINE" => StyleType::Underline,
            "STRIKETHROUGH" => StyleType::Strikethrough,
            "CODE" => StyleType::Code,
            _ => StyleType::Other(name),
        }
    }
}

impl From<&str> for StyleType {
    fn from(name: &str) -> Self {
        StyleType::from(name.to_string())
    }
}

impl From<StyleType> for String {
    fn from(style: StyleType) -> Self {
        match style {
            StyleType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
