//! Chat models
//!
//! Chat groups are derived views tied 1:1 to an event id; they are not part
//! of the event store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// A messaging context for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGroup {
    /// Same as the event id the group was derived from.
    pub id: String,
    /// Same as the event title.
    pub name: String,
    pub participants: Vec<User>,
    pub messages: Vec<Message>,
}

impl ChatGroup {
    /// Comma-separated participant names, as the chat list renders them.
    pub fn participant_names(&self) -> String {
        self.participants
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The most recently appended message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// A single chat message. Messages are stored in creation order; callers may
/// reverse for most-recent-first display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
