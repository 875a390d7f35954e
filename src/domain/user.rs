//! User records for the mock auth store.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Emails are stored lower-cased; `email` and `username` are unique across
/// the persisted table. Ids are random 8-digit strings with no collision
/// check against existing rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Random 8-digit identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unique handle (matched exactly)
    pub username: String,

    /// Lower-cased email address (unique)
    pub email: String,

    /// Short bio line
    pub bio: String,

    /// Free-form profile text
    pub description: String,

    /// Avatar URL
    pub profile_picture_url: String,

    /// When the account was created
    #[serde(default = "Utc::now")]
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated id and default profile fields
    ///
    /// The email is lower-cased here so later lookups can compare exactly.
    pub fn create(name: impl Into<String>, username: impl Into<String>, email: &str) -> Self {
        let email = email.to_lowercase();
        Self {
            id: generate_id(),
            name: name.into(),
            username: username.into(),
            profile_picture_url: avatar_url(&email),
            email,
            bio: "New user excited to explore!".to_string(),
            description: String::new(),
            registered_at: Utc::now(),
        }
    }

    /// The demo user seeded into an empty or unreadable user table
    pub fn seeded() -> Self {
        Self {
            id: "1".to_string(),
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            bio: "Frontend enthusiast and Gemini API expert.".to_string(),
            description: "Building cool things with AI.".to_string(),
            profile_picture_url: avatar_url("test@example.com"),
            registered_at: Utc::now(),
        }
    }
}

/// Generate a random 8-digit id string
pub fn generate_id() -> String {
    rand::thread_rng()
        .gen_range(10_000_000u32..100_000_000)
        .to_string()
}

/// Default avatar URL keyed by email
pub fn avatar_url(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={}", email)
}
