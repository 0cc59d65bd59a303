//! Notification feed
//!
//! Read/unread state over the notification list. The only mutation is the
//! one-way `read` flip; the feed never reorders entries.

use tracing::debug;

use crate::models::notification::Notification;

/// Ordered notification feed with read-state tracking.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Notifications in stored order.
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    /// Find a notification by id.
    pub fn find(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Flip `read` to true for the matching notification. Idempotent; there
    /// is no way back to unread. `None` if absent.
    pub fn mark_as_read(&mut self, id: &str) -> Option<&Notification> {
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        if !notification.read {
            notification.read = true;
            debug!(notification_id = %id, "Notification marked as read");
        }
        Some(notification)
    }

    /// Count of unread notifications, for the tab badge.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;
    use chrono::Utc;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::FriendRequest,
            user_id: "2".to_string(),
            event_id: None,
            message: "Sarah Smith sent you a friend request".to_string(),
            timestamp: Utc::now(),
            read,
        }
    }

    #[test]
    fn test_mark_as_read_is_monotonic() {
        let mut feed =
            NotificationFeed::with_notifications(vec![notification("1", false), notification("2", true)]);
        assert_eq!(feed.unread_count(), 1);

        let first = feed.mark_as_read("1").unwrap();
        assert!(first.read);

        // marking again is a no-op, and nothing un-reads
        let again = feed.mark_as_read("1").unwrap();
        assert!(again.read);
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn test_mark_absent_is_noop() {
        let mut feed = NotificationFeed::with_notifications(vec![notification("1", false)]);
        assert!(feed.mark_as_read("99").is_none());
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_list_preserves_order() {
        let feed =
            NotificationFeed::with_notifications(vec![notification("1", false), notification("2", false)]);
        let ids: Vec<&str> = feed.list().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
