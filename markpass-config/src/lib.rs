//! Shared configuration loader for the markpass tools.
//!
//! `defaults/markpass.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarkpassConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use markpass_convert::DocumentOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/markpass.default.toml");

/// Top-level configuration consumed by markpass applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkpassConfig {
    pub convert: ConvertConfig,
    pub cache: CacheConfig,
    pub document: DocumentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Registry name of the renderer to use.
    pub renderer: String,
}

/// Render cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    pub capacity: usize,
}

impl CacheConfig {
    /// The capacity to build a cache with, or `None` when caching is off.
    pub fn capacity_if_enabled(&self) -> Option<usize> {
        self.enabled.then_some(self.capacity)
    }
}

/// Article wrapping knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub wrap: bool,
    pub default_title: String,
}

impl From<DocumentConfig> for DocumentOptions {
    fn from(config: DocumentConfig) -> Self {
        DocumentOptions {
            default_title: config.default_title,
        }
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        DocumentOptions {
            default_title: config.default_title.clone(),
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
    pub fn build(self) -> Result<MarkpassConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkpassConfig, ConfigError> {
    Loader::new().build()
}
