//! XML-like inline element serialization
//!
//! Shows how each block would be displayed: the block is written as wire markup, rendered
//! into inline elements, and every element becomes a tag.
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <block>
//!     <text>see </text>
//!     <link href="https://example.com" target="_blank" rel="noopener noreferrer" data-testid="messageLink">https://example.com</link>
//!   </block>
//!   <block/>
//! </document>
//! ```
//!
//! ## Options
//!
//! - `detect-links`: boolean, defaults to true
//! - `link-target`, `link-rel`, `link-test-id`: anchor attributes for links

use crate::common::render::{render_wire_as_inline_with_options, RenderOptions};
use crate::common::to_wire::{convert_block, WireRules};
use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::model::{InlineElement, LinkAttributes, RichDocument};
use std::collections::HashMap;

/// Format implementation for the XML-like tag format
#[derive(Debug, Clone, Default)]
pub struct TagFormat {
    render: RenderOptions,
    link: LinkAttributes,
}

impl TagFormat {
    pub fn new(render: RenderOptions, link: LinkAttributes) -> Self {
        TagFormat { render, link }
    }

    fn with_options(&self, options: &HashMap<String, String>) -> Result<TagFormat, FormatError> {
        let mut format = self.clone();
        for (key, value) in options {
            match key.as_str() {
                "detect-links" => format.render.detect_links = parse_bool_option(key, value)?,
                "link-target" => format.link.target = value.clone(),
                "link-rel" => format.link.rel = value.clone(),
                "link-test-id" => format.link.test_id = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'tag' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(format)
    }

    fn serialize_document(&self, doc: &RichDocument) -> String {
        let rules = WireRules {
            line_separator: String::new(),
            ..WireRules::default()
        };

        let mut output = String::from("<document>\n");
        for block in &doc.blocks {
            let line = convert_block(block, &rules);
            let elements = render_wire_as_inline_with_options(line.as_str(), &self.render);
            if elements.is_empty() {
                output.push_str("  <block/>\n");
                continue;
            }
            output.push_str("  <block>\n");
            for element in &elements {
                output.push_str("    ");
                output.push_str(&self.element_tag(element));
                output.push('\n');
            }
            output.push_str("  </block>\n");
        }
        output.push_str("</document>\n");
        output
    }

    fn element_tag(&self, element: &InlineElement) -> String {
        let tag = element.kind();
        match element {
            InlineElement::Link { url, display_text } => format!(
                "<{tag} href=\"{}\" target=\"{}\" rel=\"{}\" data-testid=\"{}\">{}</{tag}>",
                escape_xml(url),
                escape_xml(&self.link.target),
                escape_xml(&self.link.rel),
                escape_xml(&self.link.test_id),
                escape_xml(display_text),
            ),
            other => format!("<{tag}>{}</{tag}>", escape_xml(other.text())),
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tags of the rendered inline elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &RichDocument) -> Result<String, FormatError> {
        Ok(self.serialize_document(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &RichDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(self.with_options(options)?.serialize_document(doc))
    }
}
