//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod chat;
pub mod event;
pub mod notification;
pub mod user;

// Re-export commonly used models
pub use chat::{ChatGroup, Message};
pub use event::{
    CreateEventRequest, Event, EventHost, EventStatus, UpdateEventRequest, SHARED_EVENT_HOST_ID,
};
pub use notification::{Notification, NotificationKind};
pub use user::{Friend, User};
