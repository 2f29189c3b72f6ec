use crate::core::{Advisor, AdvisorSession};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur with session store operations
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session store is full ({0} sessions)")]
    CapacityExceeded(u64),
}

/// Shared handle to one stored session
pub type SessionHandle = Arc<Mutex<AdvisorSession>>;

/// In-process store of live advisor sessions.
///
/// Sessions are short-lived and single-user, so they are kept in a bounded
/// moka cache and dropped after sitting idle for the configured TTL.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<String, SessionHandle>,
    advisor: Advisor,
    max_sessions: u64,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(advisor: Advisor, max_sessions: u64, idle_ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_ttl_secs))
            .build();

        Self {
            sessions,
            advisor,
            max_sessions,
        }
    }

    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }

    /// Start a fresh session and return its id with a handle to it.
    ///
    /// When the store is at capacity the cache may refuse to admit the new
    /// entry; that is reported as `CapacityExceeded` rather than handing out
    /// an id that no longer resolves.
    pub async fn create(&self) -> Result<(String, SessionHandle), SessionStoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let handle = Arc::new(Mutex::new(self.advisor.start_session()));

        self.sessions.insert(id.clone(), handle.clone()).await;
        self.sessions.run_pending_tasks().await;

        if !self.sessions.contains_key(&id) {
            tracing::warn!(max_sessions = self.max_sessions, "Session store full, rejected new session");
            return Err(SessionStoreError::CapacityExceeded(self.max_sessions));
        }

        tracing::info!(session_id = %id, "Created advisor session");
        Ok((id, handle))
    }

    /// Fetch a live session
    pub async fn get(&self, id: &str) -> Result<SessionHandle, SessionStoreError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| SessionStoreError::NotFound(id.to_string()))
    }

    /// Drop a session
    pub async fn remove(&self, id: &str) -> Result<(), SessionStoreError> {
        match self.sessions.remove(id).await {
            Some(_) => {
                tracing::info!(session_id = %id, "Removed advisor session");
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(id.to_string())),
        }
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
