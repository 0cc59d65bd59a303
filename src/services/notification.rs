//! Notification rendering service
//!
//! This service maps notification kinds to display strings and icon keys
//! through a template table, mirroring how the notifications screen words
//! each entry. Templates substitute `{user}` and `{event}` placeholders.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::notification::NotificationKind;
use crate::utils::helpers::format_relative_time;

/// Icon key used when a kind has no mapping.
const DEFAULT_ICON: &str = "notifications";

/// Display template for one notification kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub kind: NotificationKind,
    /// Message text with `{user}` / `{event}` placeholders.
    pub content: String,
    /// Icon key the presentation layer resolves to a glyph.
    pub icon: String,
}

/// Notification display derivation.
#[derive(Debug, Clone)]
pub struct NotificationService {
    templates: HashMap<NotificationKind, MessageTemplate>,
}

impl NotificationService {
    /// Create a service with the stock templates.
    pub fn new() -> Self {
        Self {
            templates: Self::load_default_templates(),
        }
    }

    /// Render the display message for a notification kind.
    ///
    /// Unknown kinds render as an empty string rather than an error.
    pub fn render_message(
        &self,
        kind: NotificationKind,
        user_name: &str,
        event_title: &str,
    ) -> String {
        let Some(template) = self.templates.get(&kind) else {
            debug!(kind = ?kind, "No template for notification kind");
            return String::new();
        };

        template
            .content
            .replace("{user}", user_name)
            .replace("{event}", event_title)
    }

    /// Render the icon key for a notification kind, with a fallback for
    /// unrecognized kinds.
    pub fn render_icon(&self, kind: NotificationKind) -> &str {
        self.templates
            .get(&kind)
            .map(|t| t.icon.as_str())
            .unwrap_or(DEFAULT_ICON)
    }

    /// Render a timestamp the way the feed displays it.
    pub fn render_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        format_relative_time(timestamp)
    }

    /// Add or replace a template.
    pub fn add_template(&mut self, template: MessageTemplate) {
        self.templates.insert(template.kind, template);
    }

    /// Remove a template.
    pub fn remove_template(&mut self, kind: NotificationKind) -> Option<MessageTemplate> {
        self.templates.remove(&kind)
    }

    /// Load default message templates
    fn load_default_templates() -> HashMap<NotificationKind, MessageTemplate> {
        let template = |kind, content: &str, icon: &str| MessageTemplate {
            kind,
            content: content.to_string(),
            icon: icon.to_string(),
        };

        let mut templates = HashMap::new();
        templates.insert(
            NotificationKind::FriendRequest,
            template(
                NotificationKind::FriendRequest,
                "{user} sent you a friend request",
                "person-add",
            ),
        );
        templates.insert(
            NotificationKind::EventInvite,
            template(
                NotificationKind::EventInvite,
                "{user} invited you to {event}",
                "calendar",
            ),
        );
        templates.insert(
            NotificationKind::FriendJoinedEvent,
            template(
                NotificationKind::FriendJoinedEvent,
                "{user} joined your event \"{event}\"",
                "person-add",
            ),
        );
        templates.insert(
            NotificationKind::NewEventInvite,
            template(
                NotificationKind::NewEventInvite,
                "{user} invited you to \"{event}\"",
                "calendar",
            ),
        );
        templates.insert(
            NotificationKind::StrangerJoinedEvent,
            template(
                NotificationKind::StrangerJoinedEvent,
                "{user} joined \"{event}\"",
                "person",
            ),
        );
        templates.insert(
            NotificationKind::FriendSharedEvent,
            template(
                NotificationKind::FriendSharedEvent,
                "{user} shared \"{event}\" with you",
                "share",
            ),
        );
        templates
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
