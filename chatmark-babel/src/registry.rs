//! Named formats a message can be read from or written to.
//!
//! The CLI builds one registry from its configuration and dispatches every conversion
//! through it: the source format is picked by name or by file extension, the document is
//! parsed, then serialized with whatever `--extra-*` options were passed.

use crate::common::render::RenderOptions;
use crate::common::to_wire::WireRules;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{RawFormat, TagFormat, WireFormat};
use crate::model::{LinkAttributes, RichDocument};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Formats keyed by name, iterated in name order.
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let doc = registry.parse("*hi*\n", "wire")?;
/// let json = registry.serialize(&doc, "raw", &HashMap::new())?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// The built-in `wire`, `raw` and `tag` formats, tuned by the given settings.
    pub fn configured(rules: WireRules, render: RenderOptions, link: LinkAttributes) -> Self {
        let mut registry = Self::new();
        registry.register(WireFormat::new(rules));
        registry.register(RawFormat);
        registry.register(TagFormat::new(render, link));
        registry
    }

    /// Add a format, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|format| format.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Registered formats, sorted by name.
    pub fn formats(&self) -> impl Iterator<Item = &(dyn Format + 'static)> + '_ {
        self.formats.values().map(Box::as_ref)
    }

    /// Name of the format claiming the extension of `path`.
    pub fn detect_from_path(&self, path: impl AsRef<Path>) -> Option<&str> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.formats()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name())
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<RichDocument, FormatError> {
        let format = self.get(format)?;
        if !format.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format.name()
            )));
        }
        format.parse(source)
    }

    /// Serialize `doc`, handing `options` to the format.
    pub fn serialize(
        &self,
        doc: &RichDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let format = self.get(format)?;
        if !format.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format.name()
            )));
        }
        format.serialize_with_options(doc, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::configured(
            WireRules::default(),
            RenderOptions::default(),
            LinkAttributes::default(),
        )
    }
}
