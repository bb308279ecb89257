//! Rich document → wire markup.
//!
//! Each block is converted on its own by splicing marker characters into its text, one
//! style range at a time, in the order the editor recorded the ranges. Splicing shifts
//! the text, so a running shift is threaded through the ranges: every range advances it
//! by two, whether or not the range's style has a marker (see
//! [`WireRules::advance_on_unrecognized`]).
//!
//! Ranges are neither sorted nor checked for overlap. Splice positions past the end of
//! the current text are clamped to its end.

use crate::model::{Block, RichDocument, StyleRange};
use tracing::{debug, warn};

/// Rules controlling wire output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRules {
    /// Appended after every block, including the last one.
    pub line_separator: String,
    /// Advance the running shift for styles without a wire marker too.
    ///
    /// The editor integration always advanced it, which misplaces markers that follow an
    /// unrecognized range. Set to `false` to only count inserted markers.
    pub advance_on_unrecognized: bool,
}

impl Default for WireRules {
    fn default() -> Self {
        WireRules {
            line_separator: "\n".to_string(),
            advance_on_unrecognized: true,
        }
    }
}

/// Convert a document to wire markup with the default rules.
pub fn convert_document_to_wire(doc: &RichDocument) -> String {
    convert_document_to_wire_with_rules(doc, &WireRules::default())
}

/// Convert a document to wire markup.
pub fn convert_document_to_wire_with_rules(doc: &RichDocument, rules: &WireRules) -> String {
    debug!(blocks = doc.blocks.len(), "converting document to wire markup");
    doc.blocks
        .iter()
        .map(|block| convert_block(block, rules))
        .collect()
}

/// Convert one block, separator included.
pub fn convert_block(block: &Block, rules: &WireRules) -> String {
    let (mut converted, _) = block.style_ranges.iter().fold(
        (block.text.clone(), 0usize),
        |(text, shift), range| match range.style.wire_marker() {
            Some(marker) => (wrap_range(&text, range, shift, marker), shift + 2),
            None if rules.advance_on_unrecognized => (text, shift + 2),
            None => (text, shift),
        },
    );
    converted.push_str(&rules.line_separator);
    converted
}

/// Insert `marker` before the range and again after it, accounting for `shift` chars
/// already inserted earlier in the block.
fn wrap_range(text: &str, range: &StyleRange, shift: usize, marker: char) -> String {
    let initial = range.offset + shift;
    let closing = initial + range.length + 1;

    let opened = splice(text, initial, marker);
    let closed = splice(&opened, closing, marker);

    let len = text.chars().count();
    if initial > len || closing > len + 1 {
        warn!(
            style = %range.style,
            offset = range.offset,
            length = range.length,
            text_len = len,
            "style range exceeds block text, clamping to end"
        );
    }

    closed
}

/// Insert `marker` at char position `at`, clamped to the end of `text`.
fn splice(text: &str, at: usize, marker: char) -> String {
    let byte_index = text
        .char_indices()
        .nth(at)
        .map_or(text.len(), |(index, _)| index);

    let mut spliced = String::with_capacity(text.len() + marker.len_utf8());
    spliced.push_str(&text[..byte_index]);
    spliced.push(marker);
    spliced.push_str(&text[byte_index..]);
    spliced
}
