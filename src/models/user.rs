//! User model

use serde::{Deserialize, Serialize};

/// A registered user. Immutable reference data; the core looks users up by
/// id but never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub profile_pic: String,
    pub bio: Option<String>,
}

/// An entry in the session user's friend list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub profile_pic: String,
}
