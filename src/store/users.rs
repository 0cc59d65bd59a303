//! User registry
//!
//! Immutable reference data seeded at construction; lookups only.

use crate::models::user::{Friend, User};

/// Registry of known users and the session user's friend list.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
    friends: Vec<Friend>,
}

impl UserRegistry {
    pub fn new(users: Vec<User>, friends: Vec<Friend>) -> Self {
        Self { users, friends }
    }

    /// Find a user by id.
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Find a user by username.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Whether `user_id` is on the session user's friend list.
    pub fn is_friend(&self, user_id: &str) -> bool {
        self.friends.iter().any(|f| f.id == user_id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }
}
