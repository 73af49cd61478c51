// File: src/config.rs
// Purpose: Configuration parsing from valinator.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

/// How fields with an error are decorated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Class added to an input that has an error
    #[serde(default = "default_input_error_class")]
    pub input_error_class: String,

    /// Tag of the message element placed after the input
    #[serde(default = "default_message_tag")]
    pub message_tag: String,

    /// Class of the message element
    #[serde(default = "default_message_class")]
    pub message_class: String,
}

/// Engine behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// What to do when a rule names a check that is not registered
    #[serde(default)]
    pub unknown_checks: UnknownCheckPolicy,
}

/// Rules naming an unregistered check are always skipped; this only
/// controls how loudly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCheckPolicy {
    /// Skip and log at debug level
    #[default]
    Ignore,
    /// Skip and log a warning
    Warn,
}

// Default values
fn default_input_error_class() -> String {
    "valinator-error".to_string()
}

fn default_message_tag() -> String {
    "span".to_string()
}

fn default_message_class() -> String {
    "valinator-error-message".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            input_error_class: default_input_error_class(),
            message_tag: default_message_tag(),
            message_class: default_message_class(),
        }
    }
}

impl DisplayConfig {
    /// CSS selector matching the message element, e.g. `span.valinator-error-message`
    pub fn message_selector(&self) -> String {
        format!("{}.{}", self.message_tag, self.message_class)
    }
}

impl Config {
    /// Load configuration from valinator.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./valinator.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("valinator.toml")
    }

    /// Parse configuration from TOML text; empty text gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
