//! Mock authentication over a key-value store.
//!
//! Holds a user table under `usersDB` and the active session under
//! `currentUser`, both JSON-encoded. Every operation reads the freshest
//! persisted table before mutating and rewrites it wholesale, so sequential
//! calls in one process observe each other; concurrent processes sharing a
//! store race last-writer-wins.
//!
//! Login and register sleep for a configurable delay to simulate a network
//! round-trip. Storage read/write failures are logged and treated as
//! empty/no-op; they never reach callers.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time;
use tracing::warn;

use crate::domain::User;
use crate::store::KeyValueStore;

/// Storage key for the serialized user table
pub const USERS_KEY: &str = "usersDB";

/// Storage key for the serialized active session
pub const SESSION_KEY: &str = "currentUser";

/// Auth operation failures
///
/// Each variant is a rejected operation with no state mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No account found. Please register.")]
    NoAccount,

    #[error("An account with this email already exists.")]
    EmailExists,

    #[error("This username is already taken.")]
    UsernameTaken,
}

/// Session state over an injected [`KeyValueStore`]
pub struct AuthStore {
    store: Arc<dyn KeyValueStore>,
    current: Option<User>,
    delay: Duration,
}

impl AuthStore {
    /// Open the store, restoring any persisted session
    ///
    /// A corrupt or unreadable session payload is discarded (and the key
    /// removed) rather than propagated: the user is simply logged out.
    pub async fn open(store: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        let current = match store.get(SESSION_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!("Discarding corrupt session payload: {}", err);
                    if let Err(err) = store.delete(SESSION_KEY).await {
                        warn!("Failed to clear corrupt session: {}", err);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read persisted session: {}", err);
                None
            }
        };

        Self {
            store,
            current,
            delay,
        }
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Log in by email (case-insensitive)
    pub async fn login(&mut self, email: &str) -> Result<User, AuthError> {
        time::sleep(self.delay).await;

        let users = self.load_users().await;
        let needle = email.to_lowercase();

        match users.into_iter().find(|u| u.email == needle) {
            Some(user) => {
                self.persist_session(&user).await;
                self.current = Some(user.clone());
                Ok(user)
            }
            None => Err(AuthError::NoAccount),
        }
    }

    /// Register a new account and log it in
    ///
    /// Fails if the lower-cased email or the exact username is already taken.
    pub async fn register(
        &mut self,
        name: &str,
        username: &str,
        email: &str,
    ) -> Result<User, AuthError> {
        time::sleep(self.delay).await;

        let mut users = self.load_users().await;
        let lower_email = email.to_lowercase();

        if users.iter().any(|u| u.email == lower_email) {
            return Err(AuthError::EmailExists);
        }
        if users.iter().any(|u| u.username == username) {
            return Err(AuthError::UsernameTaken);
        }

        let user = User::create(name, username, &lower_email);
        users.push(user.clone());
        self.save_users(&users).await;

        self.persist_session(&user).await;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the session, persisted and in-memory
    pub async fn logout(&mut self) {
        if let Err(err) = self.store.delete(SESSION_KEY).await {
            warn!("Failed to clear persisted session: {}", err);
        }
        self.current = None;
    }

    /// Replace the current user's table row and session
    ///
    /// A no-op unless `updated.id` matches the logged-in user's id and the
    /// row still exists in the table.
    pub async fn update_user(&mut self, updated: User) {
        let matches_session = self
            .current
            .as_ref()
            .is_some_and(|current| current.id == updated.id);
        if !matches_session {
            return;
        }

        let mut users = self.load_users().await;
        if let Some(row) = users.iter_mut().find(|u| u.id == updated.id) {
            *row = updated.clone();
            self.save_users(&users).await;
            self.persist_session(&updated).await;
            self.current = Some(updated);
        }
    }

    /// Read the user table, falling back to the seeded demo table
    ///
    /// A missing or malformed table is never an error.
    async fn load_users(&self) -> Vec<User> {
        match self.store.get(USERS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(err) => {
                    warn!("User table is corrupt, reseeding: {}", err);
                    vec![User::seeded()]
                }
            },
            Ok(None) => vec![User::seeded()],
            Err(err) => {
                warn!("Failed to read user table: {}", err);
                vec![User::seeded()]
            }
        }
    }

    async fn save_users(&self, users: &[User]) {
        let raw = match serde_json::to_string(users) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to serialize user table: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(USERS_KEY, &raw).await {
            warn!("Failed to persist user table: {}", err);
        }
    }

    async fn persist_session(&self, user: &User) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to serialize session: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(SESSION_KEY, &raw).await {
            warn!("Failed to persist session: {}", err);
        }
    }
}
