//! Configuration management for the detection engine.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Configuration file support via `CONFIG_PATH`
//! - Environment variable overrides (highest priority)
//! - Component-wise validation

mod detection;
mod storage;

pub use detection::*;
pub use storage::*;


use std::env;

use ::config::Config;
use ::config::Environment;
use ::config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

/// Main configuration container for the detection engine.
///
/// Sources are merged in the following order (later overrides earlier):
/// 1. Type defaults (lowest priority)
/// 2. Configuration file from the `CONFIG_PATH` environment variable (if set)
/// 3. Environment variables with the `CREATORDEX__` prefix (highest priority)
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Detection policy parameters
    #[serde(default)]
    pub detection: DetectionConfig,
    /// Creator database settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl EngineConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Validation is deferred so further overrides can still be applied via
    /// [`with_override_config`](Self::with_override_config); callers must run
    /// [`validate`](Self::validate) before using the configuration.
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("CREATORDEX")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Applies additional configuration overrides from a file.
    ///
    /// Environment variables keep the highest priority.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let builder = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path).required(true))
            .add_source(
                Environment::with_prefix("CREATORDEX")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validates every component, returning the configuration for chaining.
    pub fn validate(self) -> Result<Self> {
        self.detection.validate()?;
        self.storage.validate()?;
        Ok(self)
    }
}
