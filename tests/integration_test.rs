//! End-to-end integration tests
//!
//! Walks the share → guarded re-share → join-chat journey across the store,
//! sharing, and chat components, the way the screens drive it.

mod fixtures;

use assert_matches::assert_matches;
use fixtures::{core_with, test_settings, test_user, TestEvent};

use festa_core::models::event::{EventStatus, SHARED_EVENT_HOST_ID};
use festa_core::FestaError;

fn share_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_share_and_join_journey() {
    let users = vec![
        test_user("H"),
        test_user("U2"),
        test_user("U3"),
        test_user("U4"),
    ];
    let events = vec![TestEvent::new("E1", "Beach Party")
        .with_host("H", "Holly Host")
        .build()];
    let mut core = core_with(test_settings("U2"), users, events);

    // share E1 with two friends
    let shared = core.share_event("E1", &share_ids(&["U2", "U3"])).unwrap();
    assert!(shared.id.starts_with("E1-shared-"));
    assert_eq!(shared.host.id, SHARED_EVENT_HOST_ID);
    assert_eq!(shared.status, Some(EventStatus::Pending));
    assert_eq!(shared.invited_friends, Some(share_ids(&["U2", "U3"])));
    // the copy leads the feed, the source remains
    assert_eq!(core.events().len(), 2);
    assert_eq!(core.events()[0].id, shared.id);

    // a second share of the same source is absorbed by the guard
    assert!(core.share_event("E1", &share_ids(&["U4"])).is_none());
    assert_eq!(core.events().len(), 2);

    // the invitee joins the chat, accepting the invitation
    let group = core.join_chat(&shared.id).unwrap();
    assert_eq!(group.participants.len(), 2);
    assert_eq!(group.name, "Beach Party");
    assert!(group.messages.is_empty());
    assert_eq!(
        core.find_event(&shared.id).unwrap().status,
        Some(EventStatus::Accepted)
    );

    // the source event is untouched by the join
    assert_eq!(core.find_event("E1").unwrap().status, None);
}

#[test]
fn test_join_chat_of_regular_event_never_touches_status() {
    let users = vec![test_user("H"), test_user("U2")];
    let events = vec![TestEvent::new("E1", "Game Night")
        .with_host("H", "Holly Host")
        .build()];
    let mut core = core_with(test_settings("U2"), users, events);

    let group = core.join_chat("E1").unwrap();
    assert_eq!(group.participants.len(), 2);
    assert_eq!(core.find_event("E1").unwrap().status, None);
}

#[test]
fn test_uninvited_user_joining_leaves_invite_pending() {
    let users = vec![test_user("H"), test_user("U2"), test_user("U4")];
    let events = vec![TestEvent::new("E1", "Beach Party")
        .with_host("H", "Holly Host")
        .build()];
    let mut core = core_with(test_settings("U4"), users, events);

    let shared = core.share_event("E1", &share_ids(&["U2"])).unwrap();
    core.join_chat(&shared.id).unwrap();

    assert_eq!(
        core.find_event(&shared.id).unwrap().status,
        Some(EventStatus::Pending)
    );
}

#[test]
fn test_preseeded_shared_event_accepts_on_join() {
    let users = vec![test_user("U2")];
    let events = vec![TestEvent::new("E1-shared-1", "Beach Party")
        .with_host(SHARED_EVENT_HOST_ID, "Shared Event")
        .with_invited(&["U2"])
        .with_status(EventStatus::Pending)
        .build()];
    let mut core = core_with(test_settings("U2"), users, events);

    let group = core.join_chat("E1-shared-1").unwrap();
    assert_eq!(group.participants.len(), 2);
    assert_eq!(
        core.find_event("E1-shared-1").unwrap().status,
        Some(EventStatus::Accepted)
    );
}

#[test]
fn test_join_chat_unknown_event_is_reported() {
    let mut core = core_with(test_settings("U2"), vec![test_user("U2")], vec![]);
    assert_matches!(
        core.join_chat("missing"),
        Err(FestaError::EventNotFound { .. })
    );
}

#[test]
fn test_pass_then_reshare_creates_fresh_copy() {
    let users = vec![test_user("H"), test_user("U2")];
    let events = vec![TestEvent::new("E1", "Beach Party")
        .with_host("H", "Holly Host")
        .build()];
    let mut core = core_with(test_settings("U2"), users, events);

    let first = core.share_event("E1", &share_ids(&["U2"])).unwrap();
    assert!(core.pass_event(&first.id).is_some());

    let second = core.share_event("E1", &share_ids(&["U2"])).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(core.events().len(), 2);
}

#[test]
fn test_shared_status_flip_is_shallow() {
    let users = vec![test_user("H"), test_user("U2")];
    let events = vec![TestEvent::new("E1", "Beach Party")
        .with_host("H", "Holly Host")
        .build()];
    let mut core = core_with(test_settings("U2"), users, events);

    let shared = core.share_event("E1", &share_ids(&["U2"])).unwrap();
    core.join_chat(&shared.id).unwrap();

    let after = core.find_event(&shared.id).unwrap();
    assert_eq!(after.status, Some(EventStatus::Accepted));
    // everything but status matches the copy the share returned
    assert_eq!(after.title, shared.title);
    assert_eq!(after.description, shared.description);
    assert_eq!(after.host, shared.host);
    assert_eq!(after.invited_friends, shared.invited_friends);
    assert_eq!(after.attendees, shared.attendees);
    assert_eq!(after.max_attendees, shared.max_attendees);
}

#[test]
fn test_seeded_core_notifications_round_trip() {
    let mut core = festa_core::FestaCore::with_seed_data(test_settings("1"));

    assert_eq!(core.unread_notifications(), 1);
    core.mark_notification_read("1");
    core.mark_notification_read("1");
    assert_eq!(core.unread_notifications(), 0);
    assert!(core.notifications().iter().all(|n| n.read));

    // rendering resolves the seeded names
    let feed = core.notifications().to_vec();
    assert_eq!(
        core.render_notification(&feed[1]),
        "Mike Chen invited you to Game Night"
    );
}

#[test]
fn test_transcript_persistence_is_config_driven() {
    let users = vec![test_user("H"), test_user("U2")];
    let events = vec![TestEvent::new("E1", "Game Night")
        .with_host("H", "Holly Host")
        .build()];

    let mut settings = test_settings("U2");
    settings.chat.persist_transcripts = true;
    let mut core = core_with(settings, users, events);

    let mut group = core.join_chat("E1").unwrap();
    core.send_message(&mut group, "see you there").unwrap();

    let rejoined = core.join_chat("E1").unwrap();
    assert_eq!(rejoined.messages.len(), 1);
    assert_eq!(rejoined.messages[0].text, "see you there");
    assert_eq!(rejoined.messages[0].sender_id, "U2");
}
