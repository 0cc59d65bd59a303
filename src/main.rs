//! Festa demo shell
//!
//! Seeds the core with the built-in dataset and walks the main user
//! journey the mobile shell drives: create an event, share one, hit the
//! re-share guard, join a chat, send a message, read a notification.

use tracing::info;

use festa_core::config::Settings;
use festa_core::models::event::CreateEventRequest;
use festa_core::utils::{helpers, logging};
use festa_core::FestaCore;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", festa_core::info());

    let mut core = FestaCore::with_seed_data(settings);
    info!(
        events = core.events().len(),
        users = core.users().len(),
        unread = core.unread_notifications(),
        "Seeded core state"
    );

    // Create an event hosted by the session user
    let created_id = core
        .create_event(CreateEventRequest {
            title: "Rooftop Dinner".to_string(),
            description: Some("Sunset dinner with the crew".to_string()),
            date: Some("2026-08-20".to_string()),
            time: Some("19:30".to_string()),
            location: None,
            image: None,
            max_attendees: Some(8),
            invited_friends: vec!["2".to_string(), "4".to_string()],
        })?
        .id
        .clone();
    info!(event_id = %created_id, "Created event");

    // Share the first seeded festa with two friends; the second attempt is
    // absorbed by the guard
    let friend_ids: Vec<String> = core.friends().iter().take(2).map(|f| f.id.clone()).collect();
    let shared = core
        .share_event("1", &friend_ids)
        .ok_or_else(|| anyhow::anyhow!("expected a shared copy"))?;
    info!(shared_id = %shared.id, "Shared event with friends");

    if core.share_event("1", &["4".to_string()]).is_none() {
        info!(event_id = "1", "Re-share absorbed by the guard");
    }

    // An invitee joins the shared event's chat, which accepts the invitation
    let group = core.join_chat_as("2", &shared.id)?;
    info!(
        chat_id = %group.id,
        participants = %group.participant_names(),
        status = ?core.find_event(&shared.id).and_then(|e| e.status),
        "Invitee joined shared event chat"
    );

    // The session user chats about a regular event
    let mut chat = core.join_chat("2")?;
    if let Some(message) = core.send_message(&mut chat, "Count me in for game night!") {
        info!(chat_id = %chat.id, message_id = %message.id, "Sent message");
    }

    // Catch up on notifications
    for notification in core.notifications().to_vec() {
        let text = core.render_notification(&notification);
        let icon = core.notification_icon(&notification);
        let when = helpers::format_relative_time(notification.timestamp);
        info!(id = %notification.id, icon = icon, when = %when, read = notification.read, "{}", text);
    }
    core.mark_notification_read("1");
    info!(unread = core.unread_notifications(), "Feed after catch-up");

    Ok(())
}
