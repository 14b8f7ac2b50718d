//! App Configuration
//!
//! Parsed from `config/app.toml`, which is compiled into the bundle.

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.toml");

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub tagline: String,
    pub store_name_placeholder: String,
    /// How long a notice stays on screen before dismissing itself
    pub notice_timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Smart Shopping Lists".to_string(),
            tagline: "Organize your shopping by store and never forget an item again".to_string(),
            store_name_placeholder: "e.g., Walmart, Target, Costco...".to_string(),
            notice_timeout_ms: 4000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl AppConfig {
    /// Load the embedded configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - title is not blank
    /// - notice timeout is positive
    /// - log level is recognised
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "ui.title must not be empty".to_string(),
            });
        }
        if self.ui.notice_timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.notice_timeout_ms must be greater than 0".to_string(),
            });
        }
        self.logging.max_level()?;
        Ok(())
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        self.level.parse::<Level>().map_err(|_| ConfigError::ValidationError {
            message: format!("unknown logging.level '{}'", self.level),
        })
    }
}
