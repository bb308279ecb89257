//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing rich documents.

use crate::error::FormatError;
use crate::model::RichDocument;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and [`RichDocument`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &RichDocument) -> Result<String, FormatError> {
///         Ok(doc.texts().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "wire", "raw", "tag")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → RichDocument)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (RichDocument → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a RichDocument
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<RichDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a RichDocument into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &RichDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a RichDocument, optionally using extra parameters.
    ///
    /// Formats without options rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any option.
    fn serialize_with_options(
        &self,
        doc: &RichDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean option value (`true`/`false`, `1`/`0`, `yes`/`no`).
pub fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::NotSupported(format!(
            "Invalid boolean value '{other}' for option '{key}'"
        ))),
    }
}
