//! Chat session storage.
//!
//! [`SessionStore`] is the seam a durable backend would plug into. The only
//! implementation today, [`MemorySessionStore`], keeps sessions in process
//! memory: **every session is lost when the process exits.** Do not treat it
//! as persistence.

use async_trait::async_trait;
use gramma_core::entities::{ChatMessage, ChatSession};
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Create/list/read/append/delete access to chat sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create an empty session. A missing or blank title becomes "New Chat".
    async fn create(&self, title: Option<String>) -> ChatSession;

    /// All sessions, most recently created first.
    async fn list(&self) -> Vec<ChatSession>;

    async fn get(&self, id: &str) -> Option<ChatSession>;

    /// Append a message to a session, bumping its `updated_at`.
    ///
    /// Returns the updated session.
    async fn append(&self, id: &str, message: ChatMessage) -> Result<ChatSession, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Process-lifetime session store. Not durable.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    // Newest first.
    sessions: RwLock<Vec<ChatSession>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, title: Option<String>) -> ChatSession {
        let session = ChatSession::new(title);
        self.sessions.write().await.insert(0, session.clone());
        tracing::debug!(session = %session.id, title = %session.title, "session created");
        session
    }

    async fn list(&self) -> Vec<ChatSession> {
        self.sessions.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<ChatSession> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    async fn append(&self, id: &str, message: ChatMessage) -> Result<ChatSession, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))?;
        session.push(message);
        Ok(session.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Err(StoreError::SessionNotFound(id.to_string()));
        }
        tracing::debug!(session = %id, "session deleted");
        Ok(())
    }
}
