//! Configuration module for loading TOML config files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::debate_format::FormatId;
use crate::error::CoachError;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub coach: CoachConfig,
    pub report: ReportConfig,
}

/// Settings for the external coach service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            system_prompt: DEFAULT_COACH_PROMPT.to_string(),
            max_tokens: 800,
            timeout_secs: 120,
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Format used when none is given on the command line.
    pub default_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: FormatId::Congress.name().to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoachError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| CoachError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_str(&content)
    }

    /// Load configuration from string content.
    pub fn from_str(content: &str) -> Result<Self, CoachError> {
        toml::from_str(content)
            .map_err(|e| CoachError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// The configured default format.
    pub fn default_format(&self) -> FormatId {
        FormatId::parse(&self.report.default_format)
    }
}

/// Default configuration embedded in the binary.
pub fn default_config() -> Config {
    Config::default()
}

const DEFAULT_COACH_PROMPT: &str = "You are a debate coach who gives helpful, specific feedback.";
