//! Test fixtures and data for integration tests
//!
//! This module provides builder-style test data and helpers to assemble a
//! core instance around custom records.

use festa_core::config::Settings;
use festa_core::models::event::{Event, EventHost, EventStatus};
use festa_core::models::user::User;
use festa_core::store::{EventStore, NotificationFeed, UserRegistry};
use festa_core::FestaCore;

/// Builder for test events
#[derive(Debug, Clone)]
pub struct TestEvent {
    event: Event,
}

impl TestEvent {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            event: Event {
                id: id.to_string(),
                title: title.to_string(),
                description: "A test gathering".to_string(),
                date: "2024-07-15".to_string(),
                time: "14:00".to_string(),
                location: "Test Venue".to_string(),
                image: None,
                host: EventHost {
                    id: "H".to_string(),
                    name: "Holly Host".to_string(),
                    avatar: "https://example.com/holly.jpg".to_string(),
                },
                attendees: 5,
                max_attendees: 10,
                invited_friends: None,
                status: None,
            },
        }
    }

    pub fn with_host(mut self, id: &str, name: &str) -> Self {
        self.event.host.id = id.to_string();
        self.event.host.name = name.to_string();
        self
    }

    pub fn with_invited(mut self, ids: &[&str]) -> Self {
        self.event.invited_friends = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.event.status = Some(status);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// A user record with the given id; name is derived from it.
pub fn test_user(id: &str) -> User {
    User {
        id: id.to_string(),
        username: format!("user_{}", id.to_lowercase()),
        name: format!("User {}", id),
        profile_pic: format!("https://example.com/{}.jpg", id.to_lowercase()),
        bio: None,
    }
}

/// Settings acting as user `U2`, with default chat behavior.
pub fn test_settings(user_id: &str) -> Settings {
    let mut settings = Settings::default();
    settings.session.user_id = user_id.to_string();
    settings
}

/// Assemble a core around the given users and events, with empty
/// notification and chat collections.
pub fn core_with(settings: Settings, users: Vec<User>, events: Vec<Event>) -> FestaCore {
    FestaCore::new(
        settings,
        UserRegistry::new(users, vec![]),
        EventStore::with_events(events),
        NotificationFeed::new(),
        vec![],
    )
}
