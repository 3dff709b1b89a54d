//! Session service for Portico
//!
//! This module owns the single stored session marker: written after a
//! successful sign-in or registration, read by the entry screen at startup,
//! and removed on sign-out.
//!
//! The marker is stored as a JSON string under [`SESSION_TOKEN_KEY`]. Any
//! value stored under that key counts as a session, so markers written by
//! older builds (a bare token string) are still honored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{KeyValueStore, KvError};
use thiserror::Error;

/// Key under which the session marker is stored
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Session service error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Stored proof of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarker {
    /// Opaque session token
    pub token: String,
    /// Who signed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// When the session was established
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SessionMarker {
    /// Create a fresh marker with a random token
    ///
    /// Surrounding whitespace is trimmed; a blank name is recorded as absent.
    pub fn new(username: &str) -> Self {
        let username = username.trim();
        Self {
            token: uuid::Uuid::new_v4().to_string(),
            username: (!username.is_empty()).then(|| username.to_string()),
            created_at: Some(Utc::now()),
        }
    }

    /// Interpret a stored item; non-JSON items are treated as a bare token
    pub fn from_item(item: &str) -> Self {
        serde_json::from_str(item).unwrap_or_else(|_| Self {
            token: item.to_string(),
            username: None,
            created_at: None,
        })
    }
}

/// Session service
///
/// Reads and writes the session marker through any [`KeyValueStore`].
///
/// # Example
///
/// ```rust
/// use app_core::auth::SessionService;
/// use std::sync::Arc;
/// use storage::MemoryStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sessions = SessionService::new(Arc::new(MemoryStore::new()));
/// assert!(!sessions.has_session().await?);
///
/// sessions.establish("alice").await?;
/// assert!(sessions.has_session().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService").finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a session service over a store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write a new session marker for `username`
    ///
    /// Any name the form accepted establishes a session, blank ones included.
    pub async fn establish(&self, username: &str) -> Result<SessionMarker> {
        let marker = SessionMarker::new(username);
        let item = serde_json::to_string(&marker)?;
        self.store.set_item(SESSION_TOKEN_KEY, &item).await?;

        tracing::info!(username = marker.username.as_deref(), "Session established");
        Ok(marker)
    }

    /// Read the stored marker, if any
    pub async fn current(&self) -> Result<Option<SessionMarker>> {
        let item = self.store.get_item(SESSION_TOKEN_KEY).await?;
        Ok(item.as_deref().map(SessionMarker::from_item))
    }

    /// Whether a session marker is stored
    pub async fn has_session(&self) -> Result<bool> {
        Ok(self.store.get_item(SESSION_TOKEN_KEY).await?.is_some())
    }

    /// Remove the stored marker
    pub async fn end(&self) -> Result<()> {
        self.store.remove_item(SESSION_TOKEN_KEY).await?;
        tracing::info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;

    fn service() -> (SessionService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_no_session_initially() {
        let (sessions, _) = service();
        assert!(!sessions.has_session().await.unwrap());
        assert!(sessions.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_establish_writes_marker() {
        let (sessions, store) = service();

        let marker = sessions.establish("alice").await.unwrap();
        assert_eq!(marker.username.as_deref(), Some("alice"));
        assert!(!marker.token.is_empty());

        let item = store.get_item(SESSION_TOKEN_KEY).await.unwrap().unwrap();
        let stored: SessionMarker = serde_json::from_str(&item).unwrap();
        assert_eq!(stored, marker);
        assert_eq!(sessions.current().await.unwrap(), Some(marker));
    }

    #[tokio::test]
    async fn test_establish_trims_username() {
        let (sessions, _) = service();
        let marker = sessions.establish("  bob ").await.unwrap();
        assert_eq!(marker.username.as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn test_establish_blank_username_still_signs_in() {
        let (sessions, _) = service();
        let marker = sessions.establish("   ").await.unwrap();
        assert!(marker.username.is_none());
        assert!(!marker.token.is_empty());
        assert!(sessions.has_session().await.unwrap());
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let (sessions, _) = service();
        let first = sessions.establish("alice").await.unwrap();
        let second = sessions.establish("alice").await.unwrap();
        assert_ne!(first.token, second.token);
    }

    #[tokio::test]
    async fn test_bare_token_counts_as_session() {
        let store = Arc::new(MemoryStore::with_items([(SESSION_TOKEN_KEY, "legacy-token")]));
        let sessions = SessionService::new(store);

        assert!(sessions.has_session().await.unwrap());
        let marker = sessions.current().await.unwrap().unwrap();
        assert_eq!(marker.token, "legacy-token");
        assert!(marker.username.is_none());
    }

    #[tokio::test]
    async fn test_end_removes_marker() {
        let (sessions, _) = service();
        sessions.establish("alice").await.unwrap();

        sessions.end().await.unwrap();
        assert!(!sessions.has_session().await.unwrap());

        // Ending twice is harmless
        sessions.end().await.unwrap();
    }
}
