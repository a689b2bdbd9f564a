//! Shared configuration loader for the UPA verifier tools.
//!
//! `defaults/upa.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Binaries layer a user file and command line
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`UpaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use upa_benchlog::OutputSuffixes;
use upa_yul::{Anchors, SplitOptions};

pub use config::{ConfigError, ValueKind};

const DEFAULT_TOML: &str = include_str!("../defaults/upa.default.toml");

/// Top-level configuration consumed by the UPA binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct UpaConfig {
    pub split: SplitConfig,
    pub bench: BenchConfig,
    pub logging: LoggingConfig,
}

/// Yul splitting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    pub creation_object: String,
    pub runtime_object: String,
    pub code_keyword: String,
    pub trailing_brace: bool,
    pub strict: bool,
}

impl SplitConfig {
    pub fn options(&self) -> SplitOptions {
        SplitOptions {
            anchors: Anchors {
                creation_object: self.creation_object.clone(),
                runtime_object: self.runtime_object.clone(),
                code_keyword: self.code_keyword.clone(),
            },
            trailing_brace: self.trailing_brace,
        }
    }
}

/// Output naming for the benchmark log tables.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    pub raw_suffix: String,
    pub combined_suffix: String,
    pub processed_suffix: String,
}

impl BenchConfig {
    pub fn suffixes(&self) -> OutputSuffixes {
        OutputSuffixes {
            raw: self.raw_suffix.clone(),
            combined: self.combined_suffix.clone(),
            processed: self.processed_suffix.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// File picked up from the working directory when no `--config` is given
pub const LOCAL_CONFIG: &str = "upa.toml";

/// Embedded defaults, then TOML files in the order added, then overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer `path`; [`Loader::build`] fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer `path` only if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Set a dotted key such as `split.strict`, taking precedence over files.
    pub fn set_override<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<UpaConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}
