//! Dashboard session registry.
//!
//! Every browser tab gets its own [`GraphSession`], cloned from the shared
//! whole graph and addressed by a [`SessionId`]. Events for one session are
//! serialized by that session's mutex; different sessions never share state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use got_core::GraphSession;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Unique dashboard session identifier (UUID v4 newtype).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session's graph state plus bookkeeping.
struct SessionEntry {
    session: Arc<Mutex<GraphSession>>,
    last_active: Instant,
}

/// Registry of live dashboard sessions.
///
/// Backed by `DashMap` so handler tasks for different sessions never
/// contend on a global lock.
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionEntry>,
}

impl SessionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        SessionRegistry {
            sessions: DashMap::new(),
        }
    }

    /// Stores `session` under a fresh id.
    pub fn create(&self, session: GraphSession) -> (SessionId, Arc<Mutex<GraphSession>>) {
        let id = SessionId(Uuid::new_v4());
        let session = Arc::new(Mutex::new(session));
        self.sessions.insert(
            id,
            SessionEntry {
                session: Arc::clone(&session),
                last_active: Instant::now(),
            },
        );
        (id, session)
    }

    /// Returns the session handle and marks it active.
    pub fn get(&self, id: &SessionId) -> Option<Arc<Mutex<GraphSession>>> {
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_active = Instant::now();
            Arc::clone(&entry.session)
        })
    }

    /// Drops a session. Returns `true` if it existed.
    pub fn remove(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Removes sessions that have been idle longer than `timeout`.
    ///
    /// Returns the number of sessions removed.
    pub fn sweep_inactive(&self, timeout: Duration) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.sessions.retain(|_, entry| {
            let active = now.duration_since(entry.last_active) < timeout;
            if !active {
                removed += 1;
            }
            active
        });
        removed
    }

    /// Spawns a background task that sweeps idle sessions every `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_inactivity_sweep(self: &Arc<Self>, interval: Duration, timeout: Duration) {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);
            loop {
                tick.tick().await;
                let removed = registry.sweep_inactive(timeout);
                if removed > 0 {
                    tracing::info!(removed, remaining = registry.len(), "swept idle sessions");
                }
            }
        });
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use got_core::GraphSnapshot;

    #[test]
    fn create_get_remove() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create(GraphSession::new(GraphSnapshot::empty()));
        assert!(registry.get(&id).is_some());
        assert_eq!(registry.len(), 1);

        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));
        assert!(registry.get(&id).is_none());
    }

    #[test]
    fn sessions_are_independent() {
        let registry = SessionRegistry::new();
        let (a, _) = registry.create(GraphSession::new(GraphSnapshot::empty()));
        let (b, _) = registry.create(GraphSession::new(GraphSnapshot::empty()));
        assert_ne!(a, b);
        let a_handle = registry.get(&a).unwrap();
        let b_handle = registry.get(&b).unwrap();
        assert!(!Arc::ptr_eq(&a_handle, &b_handle));
    }

    #[test]
    fn sweep_removes_idle_sessions() {
        let registry = SessionRegistry::new();
        registry.create(GraphSession::new(GraphSnapshot::empty()));
        assert_eq!(registry.sweep_inactive(Duration::from_secs(3600)), 0);
        assert_eq!(registry.sweep_inactive(Duration::ZERO), 1);
        assert!(registry.is_empty());
    }
}
