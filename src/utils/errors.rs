//! Error handling for festa-core
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for festa-core operations
#[derive(Error, Debug)]
pub enum FestaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Chat not found: {chat_id}")]
    ChatNotFound { chat_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for festa-core operations
pub type Result<T> = std::result::Result<T, FestaError>;
