//! Services module
//!
//! This module contains the update rules layered over the stores

pub mod chat;
pub mod notification;
pub mod sharing;

// Re-export commonly used services
pub use chat::ChatService;
pub use notification::{MessageTemplate, NotificationService};
pub use sharing::SharingService;
