//! Event (Festa) model

use serde::{Deserialize, Serialize};

/// Sentinel host id carried by shared copies of an event.
pub const SHARED_EVENT_HOST_ID: &str = "shared-event";

/// A hostable, joinable social gathering.
///
/// `date` and `time` are display strings ("2024-07-15", "14:00", "TBD"); the
/// core performs no date arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image: Option<String>,
    pub host: EventHost,
    pub attendees: u32,
    pub max_attendees: u32,
    pub invited_friends: Option<Vec<String>>,
    pub status: Option<EventStatus>,
}

impl Event {
    /// Whether this event is a shared copy rather than a directly hosted one.
    pub fn is_shared_copy(&self) -> bool {
        self.host.id == SHARED_EVENT_HOST_ID
    }

    /// Whether this event is a shared copy derived from `source_id`.
    pub fn is_shared_copy_of(&self, source_id: &str) -> bool {
        self.is_shared_copy() && self.id.starts_with(&format!("{}-shared-", source_id))
    }

    /// Whether `user_id` is on the invite list.
    pub fn invites(&self, user_id: &str) -> bool {
        self.invited_friends
            .as_ref()
            .map_or(false, |ids| ids.iter().any(|id| id == user_id))
    }
}

/// The user (or the shared-copy sentinel) responsible for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHost {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// Lifecycle state of a shared copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Accepted,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Pending => write!(f, "pending"),
            EventStatus::Accepted => write!(f, "accepted"),
        }
    }
}

/// Fields accepted when creating an event. Omitted optional fields fall back
/// to the app's stock placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub max_attendees: Option<u32>,
    pub invited_friends: Vec<String>,
}

/// Partial update applied to an event; `Some` fields replace, `None` fields
/// are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub host: Option<EventHost>,
    pub attendees: Option<u32>,
    pub max_attendees: Option<u32>,
    pub invited_friends: Option<Vec<String>>,
    pub status: Option<EventStatus>,
}

impl UpdateEventRequest {
    /// Shorthand for a status-only update, the most common patch.
    pub fn status(status: EventStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
