//! Shared configuration loader for the chatmark toolchain.
//!
//! `defaults/chatmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ChatmarkConfig`].

use chatmark_babel::{LinkAttributes, RenderOptions, WireRules};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/chatmark.default.toml");

/// Top-level configuration consumed by chatmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatmarkConfig {
    pub wire: WireConfig,
    pub render: RenderConfig,
}

/// Mirrors the knobs of [`WireRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct WireConfig {
    pub line_separator: String,
    pub advance_on_unrecognized: bool,
}

impl From<&WireConfig> for WireRules {
    fn from(config: &WireConfig) -> Self {
        WireRules {
            line_separator: config.line_separator.clone(),
            advance_on_unrecognized: config.advance_on_unrecognized,
        }
    }
}

/// Rendering of wire text into inline elements.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub detect_links: bool,
    pub link: LinkConfig,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            detect_links: config.detect_links,
        }
    }
}

/// Anchor attributes written for links.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    pub target: String,
    pub rel: String,
    pub test_id: String,
}

impl From<&LinkConfig> for LinkAttributes {
    fn from(config: &LinkConfig) -> Self {
        LinkAttributes {
            target: config.target.clone(),
            rel: config.rel.clone(),
            test_id: config.test_id.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ChatmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ChatmarkConfig, ConfigError> {
    Loader::new().build()
}
