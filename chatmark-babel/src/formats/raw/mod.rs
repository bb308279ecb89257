//! Raw editor content format
//!
//! JSON in the shape of the editor's raw content state (`blocks` with `text` and
//! `inlineStyleRanges`). Anything else the editor puts in there is ignored on input and
//! not written back.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::RichDocument;

/// Format implementation for raw editor JSON
pub struct RawFormat;

impl Format for RawFormat {
    fn name(&self) -> &str {
        "raw"
    }

    fn description(&self) -> &str {
        "Rich editor raw content state (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RichDocument, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &RichDocument) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}
