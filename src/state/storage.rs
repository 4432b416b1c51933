//! Session storage implementation
//!
//! This module keeps the per-conversation [`SessionArea`] values in memory,
//! including scope mapping, expiration, and cleanup.

use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use crate::config::{SessionConfig, SessionScope};
use crate::models::SessionArea;

/// Key every chat maps to under [`SessionScope::Shared`]
const SHARED_KEY: i64 = 0;

/// In-memory session storage
///
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<i64, SessionArea>>>,
    config: SessionConfig,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    fn storage_key(&self, chat_id: i64) -> i64 {
        match self.config.scope {
            SessionScope::PerChat => chat_id,
            SessionScope::Shared => SHARED_KEY,
        }
    }

    /// Current area for a chat; 0 when nothing is stored or the session expired
    pub async fn area(&self, chat_id: i64) -> f64 {
        self.snapshot(chat_id).await.area
    }

    /// Copy of the session for a chat, a fresh one when none is live
    pub async fn snapshot(&self, chat_id: i64) -> SessionArea {
        let key = self.storage_key(chat_id);
        let sessions = self.sessions.read().await;

        match sessions.get(&key) {
            Some(session) if !session.is_expired(self.config.effective_ttl(), Utc::now()) => session.clone(),
            Some(_) => {
                debug!(chat_id = chat_id, "Session expired, treating as unset");
                SessionArea::new()
            }
            None => SessionArea::new(),
        }
    }

    /// Store an area for a chat
    pub async fn set_area(&self, chat_id: i64, area: f64) {
        let key = self.storage_key(chat_id);
        let mut sessions = self.sessions.write().await;
        sessions.entry(key).or_default().set(area);
        debug!(chat_id = chat_id, area = area, "Area stored");
    }

    /// Reset the area for a chat to 0
    pub async fn reset(&self, chat_id: i64) {
        let key = self.storage_key(chat_id);
        let mut sessions = self.sessions.write().await;
        sessions.entry(key).or_default().reset();
        debug!(chat_id = chat_id, "Area reset");
    }

    /// Remove sessions idle for longer than the configured TTL
    pub async fn cleanup_expired(&self) -> usize {
        let ttl = self.config.effective_ttl();
        if ttl == 0 {
            return 0;
        }

        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(ttl, now));
        let removed = before - sessions.len();

        crate::utils::logging::log_session_cleanup(removed, sessions.len());
        removed
    }

    /// Number of stored sessions, expired ones included until cleanup runs
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    #[cfg(test)]
    async fn backdate(&self, chat_id: i64, seconds: i64) {
        let key = self.storage_key(chat_id);
        if let Some(session) = self.sessions.write().await.get_mut(&key) {
            session.updated_at = session.updated_at - chrono::Duration::seconds(seconds);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
