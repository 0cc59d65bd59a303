//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed entry shown on the notifications tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// The user the notification is about.
    #[serde(alias = "from")]
    pub user_id: String,
    pub event_id: Option<String>,
    /// Pre-rendered fallback text stored with the record.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// The kinds of notification the feed can carry. Values outside the known
/// set deserialize to `Unknown`, which renders as an empty message and the
/// fallback icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    FriendRequest,
    EventInvite,
    FriendJoinedEvent,
    NewEventInvite,
    StrangerJoinedEvent,
    FriendSharedEvent,
    #[serde(other)]
    Unknown,
}
