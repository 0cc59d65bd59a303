//! Festa core state engine
//!
//! In-memory event, chat, and notification state for the Festa social
//! events app. This crate owns the records and their update rules: the
//! event feed, the sharing engine with its idempotence guard, on-demand
//! chat-group derivation, and the notification read-state. Rendering stays
//! with the embedding UI, which reads snapshots and calls the mutators.

pub mod app;
pub mod config;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use app::FestaCore;
pub use config::Settings;
pub use utils::errors::{FestaError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
