//! Centralized application configuration.
//!
//! This module provides strongly-typed configuration for the driver,
//! loaded via the `config` crate from an optional `chalkboard.toml` file
//! with environment variables layered on top.
//!
//! See [`GuardConfig`](chalkboard_guard::GuardConfig) for the guard
//! configuration surface.

use chalkboard_guard::GuardConfig;
use serde::Deserialize;
use std::path::Path;

/// Application configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Path the application starts on.
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// Route guard configuration.
    #[serde(default)]
    pub guard: GuardConfig,
}

fn default_start_path() -> String {
    "/".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            guard: GuardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `chalkboard.toml` (if present) with
    /// environment variables layered on top.
    ///
    /// List values in the environment are comma-separated, e.g.
    /// `GUARD__WHITELIST=/login,/,/courses,/course/*`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("chalkboard").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }
}
