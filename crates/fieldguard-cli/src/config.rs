//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//!
//! Command-line arguments are applied on top by the handlers.

use crate::error::{Error, Result};
use crate::logging::LogFormat;
use fieldguard_core::{FieldNaming, ValidationMode, ValidatorConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validator defaults
    pub validation: ValidationSettings,

    /// Output settings
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Validator defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Log and collect violations instead of stopping at the first one
    pub fail_silently: bool,

    /// Field name reported in violations
    pub naming: FieldNaming,

    /// Recording cap in silent mode (0 = unlimited)
    pub max_violations: usize,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,

    /// Per-module levels, e.g. `fieldguard_core: debug`
    pub modules: Option<HashMap<String, String>>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl ValidationSettings {
    /// Validator configuration described by these settings
    pub fn to_validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            mode: ValidationMode::from_fail_silently(self.fail_silently),
            naming: self.naming,
            max_violations: self.max_violations,
        }
    }
}

/// Document formats understood by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (JSON when unknown)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Toml => "TOML",
        }
    }

    /// Parse `content` in this format
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        Ok(match self {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        })
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::FileNotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".fieldguard.yaml"),
            PathBuf::from(".fieldguard.yml"),
            PathBuf::from(".fieldguard.json"),
            PathBuf::from(".fieldguard.toml"),
            PathBuf::from("fieldguard.yaml"),
            PathBuf::from("fieldguard.json"),
            PathBuf::from("fieldguard.toml"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let fieldguard_dir = config_dir.join("fieldguard");
            paths.push(fieldguard_dir.join("config.yaml"));
            paths.push(fieldguard_dir.join("config.json"));
            paths.push(fieldguard_dir.join("config.toml"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".fieldguard.yaml"));
            paths.push(home_dir.join(".fieldguard.json"));
        }

        paths
    }
}
