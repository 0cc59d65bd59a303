//! Event sharing service
//!
//! This service derives a "shared copy" of an event when a user shares it
//! with friends: a pending event owned by the shared-event sentinel host,
//! carrying the recipient list. Repeated shares of the same source are
//! absorbed by an idempotence guard.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::event::{Event, EventHost, EventStatus, SHARED_EVENT_HOST_ID};
use crate::store::EventStore;
use crate::utils::ids::IdGenerator;

/// Avatar placeholder stamped on shared copies.
const SHARED_EVENT_AVATAR: &str = "https://via.placeholder.com/150";

/// Service deriving shared copies of events.
#[derive(Debug, Clone)]
pub struct SharingService {
    ids: Arc<IdGenerator>,
}

impl SharingService {
    /// Create a new SharingService drawing ids from `ids`.
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self { ids }
    }

    /// Share the event with the given friends, producing a pending shared
    /// copy at the front of the store.
    ///
    /// Returns `None` when nothing was created: an empty recipient list, an
    /// unknown source event, or an existing shared copy of the same source
    /// (the guard that keeps repeated taps from spawning duplicate invites).
    pub fn share(
        &self,
        store: &mut EventStore,
        event_id: &str,
        friend_ids: &[String],
    ) -> Option<Event> {
        if friend_ids.is_empty() {
            warn!(event_id = %event_id, "Share requested with no recipients, ignoring");
            return None;
        }

        let source = match store.find_event(event_id) {
            Some(event) => event.clone(),
            None => {
                warn!(event_id = %event_id, "Share requested for unknown event, ignoring");
                return None;
            }
        };

        if store.has_shared_copy_of(event_id) {
            debug!(event_id = %event_id, "Shared copy already exists, ignoring re-share");
            return None;
        }

        let shared = Event {
            id: self.ids.shared_copy_id(event_id),
            host: EventHost {
                id: SHARED_EVENT_HOST_ID.to_string(),
                name: "Shared Event".to_string(),
                avatar: SHARED_EVENT_AVATAR.to_string(),
            },
            invited_friends: Some(friend_ids.to_vec()),
            status: Some(EventStatus::Pending),
            ..source
        };

        info!(
            event_id = %event_id,
            shared_id = %shared.id,
            recipients = friend_ids.len(),
            "Created shared copy"
        );
        store.add_event(shared.clone());
        Some(shared)
    }
}
