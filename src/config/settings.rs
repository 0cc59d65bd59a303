//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the state engine
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub session: SessionConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

/// Local session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Id of the locally signed-in user all intents act as.
    pub user_id: String,
    /// Name stamped on events the session user hosts.
    pub display_name: String,
}

/// Chat behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// When true, sent messages are kept per chat id and re-attached on the
    /// next derivation of the same chat. When false, every derivation
    /// starts with an empty transcript.
    pub persist_transcripts: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout-only when unset.
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from the optional `config.*` file and `FESTA_*`
    /// environment variables, on top of the built-in defaults.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FESTA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a specific configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::FestaError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                user_id: "1".to_string(),
                display_name: "You".to_string(),
            },
            chat: ChatConfig {
                persist_transcripts: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
