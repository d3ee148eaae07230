// Session-scoped key-value storage for display preferences

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Key-value store for one browsing session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// Sessions kept when no limit is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct SessionEntry {
    store: Arc<MemorySessionStore>,
    last_seen: u64,
}

/// Live sessions keyed by session id. Ending a session drops its store.
/// Only [`SessionRegistry::session`] creates entries; once `max_sessions` are
/// live, creating another evicts the one idle the longest.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    max_sessions: usize,
    clock: AtomicU64,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            clock: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Existing store for `id`; never creates one.
    pub fn get(&self, id: &str) -> Option<Arc<MemorySessionStore>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.get_mut(id).map(|entry| {
            entry.last_seen = self.tick();
            entry.store.clone()
        })
    }

    /// Store for `id`, created on first use.
    pub fn session(&self, id: &str) -> Arc<MemorySessionStore> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = sessions.get_mut(id) {
            entry.last_seen = self.tick();
            return entry.store.clone();
        }
        if sessions.len() >= self.max_sessions
            && let Some(idle) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| key.clone())
        {
            debug!(session = %idle, "evicting idle session");
            sessions.remove(&idle);
        }
        let store = Arc::new(MemorySessionStore::new());
        sessions.insert(
            id.to_string(),
            SessionEntry {
                store: store.clone(),
                last_seen: self.tick(),
            },
        );
        store
    }

    /// Returns whether the session existed.
    pub fn end(&self, id: &str) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
