//! Application core wiring
//!
//! `FestaCore` owns the stores and services and exposes the user-intent
//! surface the presentation layer calls into. Every mutator runs to
//! completion within one interaction before control returns to the caller;
//! there is no background work.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Settings;
use crate::models::chat::{ChatGroup, Message};
use crate::models::event::{CreateEventRequest, Event, EventHost};
use crate::models::notification::Notification;
use crate::models::user::{Friend, User};
use crate::seed;
use crate::services::{ChatService, NotificationService, SharingService};
use crate::store::{EventStore, NotificationFeed, UserRegistry};
use crate::utils::errors::{FestaError, Result};
use crate::utils::ids::IdGenerator;

/// The assembled state engine.
pub struct FestaCore {
    settings: Settings,
    ids: Arc<IdGenerator>,
    events: EventStore,
    users: UserRegistry,
    notifications: NotificationFeed,
    sharing: SharingService,
    chat: ChatService,
    renderer: NotificationService,
}

impl FestaCore {
    /// Assemble the core from settings and seed collections.
    pub fn new(
        settings: Settings,
        users: UserRegistry,
        events: EventStore,
        notifications: NotificationFeed,
        chats: Vec<ChatGroup>,
    ) -> Self {
        // issue ids above anything already in the seed so create/share can
        // never collide with it
        let next = events
            .events()
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let ids = Arc::new(IdGenerator::starting_at(next));
        let sharing = SharingService::new(Arc::clone(&ids));
        let chat = ChatService::with_directory(settings.chat.clone(), chats);

        Self {
            settings,
            ids,
            events,
            users,
            notifications,
            sharing,
            chat,
            renderer: NotificationService::new(),
        }
    }

    /// Assemble the core with the built-in demo dataset.
    pub fn with_seed_data(settings: Settings) -> Self {
        let users = UserRegistry::new(seed::users(), seed::friends());
        let chats = seed::chats(&users);
        Self::new(
            settings,
            users,
            EventStore::with_events(seed::festas()),
            NotificationFeed::with_notifications(seed::notifications()),
            chats,
        )
    }

    /// Create an event hosted by the session user.
    ///
    /// Optional fields fall back to the app's stock placeholders; an empty
    /// title is rejected.
    pub fn create_event(&mut self, request: CreateEventRequest) -> Result<&Event> {
        if request.title.trim().is_empty() {
            return Err(FestaError::InvalidInput(
                "Event title is required".to_string(),
            ));
        }

        let host = self.session_host()?;
        let event = Event {
            id: self.ids.next_id(),
            title: request.title,
            description: request
                .description
                .unwrap_or_else(|| "No description provided".to_string()),
            date: request.date.unwrap_or_else(|| "TBD".to_string()),
            time: request.time.unwrap_or_else(|| "TBD".to_string()),
            location: request
                .location
                .unwrap_or_else(|| "Location to be determined".to_string()),
            image: request.image,
            host,
            attendees: 1,
            max_attendees: request.max_attendees.unwrap_or(20),
            invited_friends: if request.invited_friends.is_empty() {
                None
            } else {
                Some(request.invited_friends)
            },
            status: None,
        };

        info!(event_id = %event.id, title = %event.title, "Event created");
        self.events.add_event(event);
        Ok(&self.events.events()[0])
    }

    /// Pass on an event, removing it from the feed.
    pub fn pass_event(&mut self, event_id: &str) -> Option<Event> {
        let removed = self.events.remove_event(event_id);
        match &removed {
            Some(event) => info!(event_id = %event_id, title = %event.title, "Event passed"),
            None => warn!(event_id = %event_id, "Pass requested for unknown event"),
        }
        removed
    }

    /// Share an event with friends. `None` when the share was absorbed
    /// (empty recipients, unknown event, or an existing shared copy).
    pub fn share_event(&mut self, event_id: &str, friend_ids: &[String]) -> Option<Event> {
        self.sharing.share(&mut self.events, event_id, friend_ids)
    }

    /// Join the chat for an event as the session user.
    pub fn join_chat(&mut self, event_id: &str) -> Result<ChatGroup> {
        let actor = self.settings.session.user_id.clone();
        self.join_chat_as(&actor, event_id)
    }

    /// Join the chat for an event as an arbitrary user.
    pub fn join_chat_as(&mut self, actor_id: &str, event_id: &str) -> Result<ChatGroup> {
        self.chat
            .derive_chat_group(&mut self.events, &self.users, actor_id, event_id)
    }

    /// Open a pre-existing chat from the directory.
    pub fn open_chat(&self, chat_id: &str) -> Result<ChatGroup> {
        self.chat.open_chat(chat_id)
    }

    /// Send a message into a chat group as the session user.
    pub fn send_message(&mut self, group: &mut ChatGroup, text: &str) -> Option<Message> {
        let sender = self.settings.session.user_id.clone();
        self.chat.send_message(group, &sender, text)
    }

    /// Mark a notification as read.
    pub fn mark_notification_read(&mut self, id: &str) -> Option<&Notification> {
        self.notifications.mark_as_read(id)
    }

    /// The event feed, most recent first.
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// Find one event by id.
    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.find_event(id)
    }

    /// The notification feed in stored order.
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.list()
    }

    /// Count of unread notifications.
    pub fn unread_notifications(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn users(&self) -> &[User] {
        self.users.users()
    }

    pub fn friends(&self) -> &[Friend] {
        self.users.friends()
    }

    /// The chats listed on the chats tab.
    pub fn chats(&self) -> &[ChatGroup] {
        self.chat.chats()
    }

    /// The display message for a notification, with names resolved against
    /// the registries.
    pub fn render_notification(&self, notification: &Notification) -> String {
        let user_name = self
            .users
            .find_by_id(&notification.user_id)
            .map(|u| u.name.as_str())
            .unwrap_or("");
        let event_title = notification
            .event_id
            .as_deref()
            .and_then(|id| self.events.find_event(id))
            .map(|e| e.title.as_str())
            .unwrap_or("");
        self.renderer
            .render_message(notification.kind, user_name, event_title)
    }

    /// The icon key for a notification.
    pub fn notification_icon(&self, notification: &Notification) -> &str {
        self.renderer.render_icon(notification.kind)
    }

    /// The signed-in user, if present in the registry.
    pub fn session_user(&self) -> Option<&User> {
        self.users.find_by_id(&self.settings.session.user_id)
    }

    fn session_host(&self) -> Result<EventHost> {
        let user = self
            .session_user()
            .ok_or_else(|| FestaError::UserNotFound {
                user_id: self.settings.session.user_id.clone(),
            })?;
        Ok(EventHost {
            id: user.id.clone(),
            name: self.settings.session.display_name.clone(),
            avatar: user.profile_pic.clone(),
        })
    }
}
