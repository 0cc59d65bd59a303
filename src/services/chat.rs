//! Chat service
//!
//! Chat groups are derived on demand from the event and user registries
//! rather than stored: participants are the acting user and the event host.
//! Joining the chat of a shared event you were invited to accepts the
//! invitation as a side effect. Transcript persistence across derivations is
//! a configuration choice; the default is ephemeral.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::ChatConfig;
use crate::models::chat::{ChatGroup, Message};
use crate::models::event::{EventStatus, UpdateEventRequest};
use crate::models::user::User;
use crate::store::{EventStore, UserRegistry};
use crate::utils::errors::{FestaError, Result};
use crate::utils::helpers::truncate_text;
use crate::utils::ids::generate_message_id;

/// Longest chat-list preview before truncation.
const PREVIEW_LENGTH: usize = 80;

/// Service deriving chat groups and handling message entry.
#[derive(Debug, Clone)]
pub struct ChatService {
    config: ChatConfig,
    /// Static chats the app ships with, listed on the chats tab.
    directory: Vec<ChatGroup>,
    /// Messages kept across derivations when persistence is enabled.
    transcripts: HashMap<String, Vec<Message>>,
}

impl ChatService {
    /// Create a ChatService with an empty chat directory.
    pub fn new(config: ChatConfig) -> Self {
        Self::with_directory(config, Vec::new())
    }

    /// Create a ChatService listing the given pre-existing chats.
    pub fn with_directory(config: ChatConfig, directory: Vec<ChatGroup>) -> Self {
        Self {
            config,
            directory,
            transcripts: HashMap::new(),
        }
    }

    /// Derive the chat group for an event, acting as `actor_id`.
    ///
    /// Participants are the actor and the event host. If the event is a
    /// shared copy and the actor is on its invite list, the event's status
    /// flips to accepted before the group is returned; deriving the chat of
    /// a regular event never touches status.
    pub fn derive_chat_group(
        &self,
        store: &mut EventStore,
        users: &UserRegistry,
        actor_id: &str,
        event_id: &str,
    ) -> Result<ChatGroup> {
        let (title, host, accept) = {
            let event = store.find_event(event_id).ok_or_else(|| FestaError::EventNotFound {
                event_id: event_id.to_string(),
            })?;
            (
                event.title.clone(),
                event.host.clone(),
                event.is_shared_copy() && event.invites(actor_id),
            )
        };

        let actor = users
            .find_by_id(actor_id)
            .cloned()
            .ok_or_else(|| FestaError::UserNotFound {
                user_id: actor_id.to_string(),
            })?;

        if accept {
            store.update_event(event_id, UpdateEventRequest::status(EventStatus::Accepted));
            info!(event_id = %event_id, actor_id = %actor_id, "Accepted shared event on chat join");
        }

        // the shared-copy sentinel has no registry entry; fall back to the
        // host record carried on the event
        let host_user = users.find_by_id(&host.id).cloned().unwrap_or_else(|| User {
            id: host.id.clone(),
            username: host.id.clone(),
            name: host.name.clone(),
            profile_pic: host.avatar.clone(),
            bio: None,
        });

        let mut participants = vec![actor];
        if host_user.id != actor_id {
            participants.push(host_user);
        }

        let messages = if self.config.persist_transcripts {
            self.transcripts.get(event_id).cloned().unwrap_or_default()
        } else {
            Vec::new()
        };

        debug!(
            event_id = %event_id,
            actor_id = %actor_id,
            participants = participants.len(),
            "Derived chat group"
        );
        Ok(ChatGroup {
            id: event_id.to_string(),
            name: title,
            participants,
            messages,
        })
    }

    /// Append a message from `sender_id` to the group, in creation order.
    ///
    /// Blank text is a no-op. When transcript persistence is enabled the
    /// message is also recorded under the chat id for the next derivation.
    pub fn send_message(
        &mut self,
        group: &mut ChatGroup,
        sender_id: &str,
        text: &str,
    ) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            debug!(chat_id = %group.id, "Ignoring empty message");
            return None;
        }

        let message = Message {
            id: generate_message_id(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        };

        group.messages.push(message.clone());
        if self.config.persist_transcripts {
            self.transcripts
                .entry(group.id.clone())
                .or_default()
                .push(message.clone());
        }

        debug!(chat_id = %group.id, sender_id = %sender_id, "Message appended");
        Some(message)
    }

    /// Open a chat from the directory by id.
    pub fn open_chat(&self, chat_id: &str) -> Result<ChatGroup> {
        let mut chat = self
            .directory
            .iter()
            .find(|c| c.id == chat_id)
            .cloned()
            .ok_or_else(|| FestaError::ChatNotFound {
                chat_id: chat_id.to_string(),
            })?;

        if self.config.persist_transcripts {
            if let Some(extra) = self.transcripts.get(chat_id) {
                chat.messages.extend(extra.iter().cloned());
            }
        }

        Ok(chat)
    }

    /// The chats listed on the chats tab.
    pub fn chats(&self) -> &[ChatGroup] {
        &self.directory
    }

    /// Truncated last-message preview for the chat list.
    pub fn chat_preview(&self, chat_id: &str) -> Option<String> {
        let chat = self.directory.iter().find(|c| c.id == chat_id)?;
        chat.last_message()
            .map(|m| truncate_text(&m.text, PREVIEW_LENGTH))
    }
}
