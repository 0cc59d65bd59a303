//! Built-in demo dataset
//!
//! The static records a fresh install starts from. Timestamps are relative
//! to now so the feed always reads as recent activity.

use chrono::{Duration, Utc};

use crate::models::chat::{ChatGroup, Message};
use crate::models::event::{Event, EventHost};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::user::{Friend, User};
use crate::store::UserRegistry;

/// The registered users.
pub fn users() -> Vec<User> {
    let user = |id: &str, username: &str, name: &str, pic: &str, bio: &str| User {
        id: id.to_string(),
        username: username.to_string(),
        name: name.to_string(),
        profile_pic: pic.to_string(),
        bio: Some(bio.to_string()),
    };

    vec![
        user(
            "1",
            "johndoe",
            "John Doe",
            "https://randomuser.me/api/portraits/men/32.jpg",
            "Software developer and coffee enthusiast",
        ),
        user(
            "2",
            "sarahsmith",
            "Sarah Smith",
            "https://randomuser.me/api/portraits/women/1.jpg",
            "Digital nomad and travel lover",
        ),
        user(
            "3",
            "mikechen",
            "Mike Chen",
            "https://randomuser.me/api/portraits/men/2.jpg",
            "Photographer and adventure seeker",
        ),
        user(
            "4",
            "emilywilson",
            "Emily Wilson",
            "https://randomuser.me/api/portraits/women/2.jpg",
            "Foodie and event organizer",
        ),
    ]
}

/// The session user's friends.
pub fn friends() -> Vec<Friend> {
    let friend = |id: &str, name: &str, pic: &str| Friend {
        id: id.to_string(),
        name: name.to_string(),
        profile_pic: pic.to_string(),
    };

    vec![
        friend(
            "2",
            "Sarah Smith",
            "https://randomuser.me/api/portraits/women/1.jpg",
        ),
        friend(
            "3",
            "Mike Chen",
            "https://randomuser.me/api/portraits/men/2.jpg",
        ),
        friend(
            "4",
            "Emily Wilson",
            "https://randomuser.me/api/portraits/women/2.jpg",
        ),
    ]
}

/// The starting event feed.
pub fn festas() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Beach Party".to_string(),
            description: "Join us for a fun day at the beach with music, games, and BBQ!"
                .to_string(),
            date: "2024-07-15".to_string(),
            time: "14:00".to_string(),
            location: "Santa Monica Beach".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1533219057257-4bb9ed5d2cc6?w=800".to_string(),
            ),
            host: EventHost {
                id: "2".to_string(),
                name: "Sarah Smith".to_string(),
                avatar: "https://randomuser.me/api/portraits/women/1.jpg".to_string(),
            },
            attendees: 12,
            max_attendees: 20,
            invited_friends: None,
            status: None,
        },
        Event {
            id: "2".to_string(),
            title: "Game Night".to_string(),
            description: "Board games, video games, and pizza! All are welcome.".to_string(),
            date: "2024-07-20".to_string(),
            time: "19:00".to_string(),
            location: "123 Game Street".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=500".to_string(),
            ),
            host: EventHost {
                id: "3".to_string(),
                name: "Mike Chen".to_string(),
                avatar: "https://randomuser.me/api/portraits/men/2.jpg".to_string(),
            },
            attendees: 8,
            max_attendees: 15,
            invited_friends: None,
            status: None,
        },
        Event {
            id: "3".to_string(),
            title: "Hiking Adventure".to_string(),
            description: "Let's explore the beautiful trails of Griffith Park!".to_string(),
            date: "2024-07-25".to_string(),
            time: "09:00".to_string(),
            location: "Griffith Park".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=500".to_string(),
            ),
            host: EventHost {
                id: "4".to_string(),
                name: "Emily Wilson".to_string(),
                avatar: "https://randomuser.me/api/portraits/women/2.jpg".to_string(),
            },
            attendees: 5,
            max_attendees: 10,
            invited_friends: None,
            status: None,
        },
    ]
}

/// The pre-existing chats, with participant ids resolved against `users`.
pub fn chats(users: &UserRegistry) -> Vec<ChatGroup> {
    let resolve = |ids: &[&str]| -> Vec<User> {
        ids.iter()
            .filter_map(|id| users.find_by_id(id).cloned())
            .collect()
    };

    vec![
        ChatGroup {
            id: "1".to_string(),
            name: "Beach Party Chat".to_string(),
            participants: resolve(&["1", "2", "3"]),
            messages: vec![
                Message {
                    id: "1".to_string(),
                    sender_id: "2".to_string(),
                    text: "Hey everyone! Looking forward to the beach party!".to_string(),
                    timestamp: Utc::now() - Duration::days(5),
                },
                Message {
                    id: "2".to_string(),
                    sender_id: "1".to_string(),
                    text: "Me too! What should I bring?".to_string(),
                    timestamp: Utc::now() - Duration::days(5) + Duration::minutes(5),
                },
            ],
        },
        ChatGroup {
            id: "2".to_string(),
            name: "Game Night Chat".to_string(),
            participants: resolve(&["1", "3", "4"]),
            messages: vec![Message {
                id: "1".to_string(),
                sender_id: "3".to_string(),
                text: "Who's bringing the board games?".to_string(),
                timestamp: Utc::now() - Duration::days(2),
            }],
        },
    ]
}

/// The starting notification feed.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationKind::FriendRequest,
            user_id: "2".to_string(),
            event_id: None,
            message: "Sarah Smith sent you a friend request".to_string(),
            timestamp: Utc::now() - Duration::days(6),
            read: false,
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationKind::EventInvite,
            user_id: "3".to_string(),
            event_id: Some("2".to_string()),
            message: "Mike Chen invited you to Game Night".to_string(),
            timestamp: Utc::now() - Duration::days(2),
            read: true,
        },
    ]
}
