//! WhatsApp-style wire markup format
//!
//! Bidirectional: parsing goes through [`convert_wire_to_document`] (Comrak backed),
//! serialization through the style-range splicing of [`convert_document_to_wire_with_rules`].
//!
//! | Rich document    | Wire markup | Export            | Import                   |
//! |------------------|-------------|-------------------|--------------------------|
//! | Block            | line        | + line separator  | one block per line       |
//! | BOLD             | `*text*`    | direct            | direct                   |
//! | ITALIC           | `_text_`    | direct            | direct                   |
//! | CODE             | `` `x` ``   | dropped           | parsed as a code span    |
//! | STRIKETHROUGH    | `~text~`    | dropped           | kept as literal text     |
//! | other styles     |             | dropped           |                          |
//!
//! # Options
//!
//! - `line-separator`: `lf`, `crlf`, or a literal separator
//! - `advance-on-unrecognized`: boolean, see [`WireRules`]

use crate::common::from_wire::convert_wire_to_document;
use crate::common::to_wire::{convert_document_to_wire_with_rules, WireRules};
use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::model::RichDocument;
use std::collections::HashMap;

/// Format implementation for wire markup
#[derive(Debug, Clone, Default)]
pub struct WireFormat {
    rules: WireRules,
}

impl WireFormat {
    pub fn new(rules: WireRules) -> Self {
        WireFormat { rules }
    }

    fn rules_with_options(&self, options: &HashMap<String, String>) -> Result<WireRules, FormatError> {
        let mut rules = self.rules.clone();
        for (key, value) in options {
            match key.as_str() {
                "line-separator" => rules.line_separator = parse_line_separator(value),
                "advance-on-unrecognized" => {
                    rules.advance_on_unrecognized = parse_bool_option(key, value)?
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'wire' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(rules)
    }
}

fn parse_line_separator(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "lf" => "\n".to_string(),
        "crlf" => "\r\n".to_string(),
        _ => raw.to_string(),
    }
}

impl Format for WireFormat {
    fn name(&self) -> &str {
        "wire"
    }

    fn description(&self) -> &str {
        "WhatsApp-style message markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "wa"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RichDocument, FormatError> {
        Ok(convert_wire_to_document(source))
    }

    fn serialize(&self, doc: &RichDocument) -> Result<String, FormatError> {
        Ok(convert_document_to_wire_with_rules(doc, &self.rules))
    }

    fn serialize_with_options(
        &self,
        doc: &RichDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let rules = self.rules_with_options(options)?;
        Ok(convert_document_to_wire_with_rules(doc, &rules))
    }
}
