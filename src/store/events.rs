//! In-memory event store
//!
//! The ordered registry of events behind the feed. Newest entries sit at the
//! front; all operations are total, so an id that matches nothing is a
//! `None`, never an error or a panic.

use tracing::debug;

use crate::models::event::{Event, UpdateEventRequest};

/// Ordered, in-memory registry of events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `events`, kept in the given order.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Prepend `event` to the collection. Field contents are the caller's
    /// responsibility; the store does not validate them.
    pub fn add_event(&mut self, event: Event) {
        debug!(event_id = %event.id, title = %event.title, "Adding event to store");
        self.events.insert(0, event);
    }

    /// Remove the event with matching id, returning it. `None` if absent.
    pub fn remove_event(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        debug!(event_id = %id, "Removing event from store");
        Some(self.events.remove(index))
    }

    /// Shallow-merge `request` into the event with matching id, leaving
    /// untouched fields as they were. `None` if absent.
    pub fn update_event(&mut self, id: &str, request: UpdateEventRequest) -> Option<&Event> {
        let event = self.events.iter_mut().find(|e| e.id == id)?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = description;
        }
        if let Some(date) = request.date {
            event.date = date;
        }
        if let Some(time) = request.time {
            event.time = time;
        }
        if let Some(location) = request.location {
            event.location = location;
        }
        if let Some(image) = request.image {
            event.image = Some(image);
        }
        if let Some(host) = request.host {
            event.host = host;
        }
        if let Some(attendees) = request.attendees {
            event.attendees = attendees;
        }
        if let Some(max_attendees) = request.max_attendees {
            event.max_attendees = max_attendees;
        }
        if let Some(invited_friends) = request.invited_friends {
            event.invited_friends = Some(invited_friends);
        }
        if let Some(status) = request.status {
            event.status = Some(status);
        }

        debug!(event_id = %id, "Updated event");
        Some(event)
    }

    /// Find an event by id.
    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// The current collection, most recent first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events hosted by `host_id`.
    pub fn hosted_by(&self, host_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.host.id == host_id).collect()
    }

    /// Shared copies derived from `source_id`.
    pub fn shared_copies_of(&self, source_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.is_shared_copy_of(source_id))
            .collect()
    }

    /// Whether a shared copy of `source_id` already exists.
    pub fn has_shared_copy_of(&self, source_id: &str) -> bool {
        self.events.iter().any(|e| e.is_shared_copy_of(source_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventHost, EventStatus};

    fn event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "A gathering".to_string(),
            date: "2024-07-15".to_string(),
            time: "14:00".to_string(),
            location: "Somewhere".to_string(),
            image: None,
            host: EventHost {
                id: "2".to_string(),
                name: "Sarah Smith".to_string(),
                avatar: "https://example.com/sarah.jpg".to_string(),
            },
            attendees: 5,
            max_attendees: 10,
            invited_friends: None,
            status: None,
        }
    }

    #[test]
    fn test_add_prepends() {
        let mut store = EventStore::new();
        store.add_event(event("1", "First"));
        store.add_event(event("2", "Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.events()[0].id, "2");
        assert_eq!(store.events()[1].id, "1");
    }

    #[test]
    fn test_remove_event() {
        let mut store = EventStore::with_events(vec![event("1", "First"), event("2", "Second")]);

        let removed = store.remove_event("1");
        assert_eq!(removed.map(|e| e.id), Some("1".to_string()));
        assert!(store.find_event("1").is_none());
        assert_eq!(store.len(), 1);

        // absent id is a no-op, not an error
        assert!(store.remove_event("1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_is_shallow_merge() {
        let mut store = EventStore::with_events(vec![event("1", "Beach Party")]);
        let before = store.find_event("1").cloned().unwrap();

        let updated = store
            .update_event("1", UpdateEventRequest::status(EventStatus::Accepted))
            .cloned()
            .unwrap();

        assert_eq!(updated.status, Some(EventStatus::Accepted));
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.date, before.date);
        assert_eq!(updated.time, before.time);
        assert_eq!(updated.location, before.location);
        assert_eq!(updated.host, before.host);
        assert_eq!(updated.attendees, before.attendees);
        assert_eq!(updated.max_attendees, before.max_attendees);
        assert_eq!(updated.invited_friends, before.invited_friends);
    }

    #[test]
    fn test_update_absent_is_noop() {
        let mut store = EventStore::new();
        assert!(store
            .update_event("99", UpdateEventRequest::status(EventStatus::Accepted))
            .is_none());
    }

    #[test]
    fn test_shared_copy_queries() {
        let mut store = EventStore::with_events(vec![event("1", "Beach Party")]);

        let mut copy = event("1-shared-7", "Beach Party");
        copy.host = EventHost {
            id: crate::models::event::SHARED_EVENT_HOST_ID.to_string(),
            name: "Shared Event".to_string(),
            avatar: "https://via.placeholder.com/150".to_string(),
        };
        store.add_event(copy);

        assert!(store.has_shared_copy_of("1"));
        assert!(!store.has_shared_copy_of("2"));
        assert_eq!(store.shared_copies_of("1").len(), 1);

        // same prefix but a real host does not count as a shared copy
        let mut impostor = event("2-shared-9", "Game Night");
        impostor.host.id = "3".to_string();
        store.add_event(impostor);
        assert!(!store.has_shared_copy_of("2"));
    }

    #[test]
    fn test_hosted_by() {
        let mut store = EventStore::new();
        store.add_event(event("1", "First"));
        let mut other = event("2", "Second");
        other.host.id = "4".to_string();
        store.add_event(other);

        assert_eq!(store.hosted_by("2").len(), 1);
        assert_eq!(store.hosted_by("4").len(), 1);
        assert!(store.hosted_by("9").is_empty());
    }
}
