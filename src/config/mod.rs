//! Configuration module
//!
//! This module handles loading and validation of settings

pub mod settings;
pub mod validation;

pub use settings::{ChatConfig, LoggingConfig, SessionConfig, Settings};
