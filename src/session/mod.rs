//! Durable session storage and the shared session context.
//!
//! The session is four flat string entries (`token`, `username`, `role`,
//! `email`). [`SessionContext`] owns the storage handle and is passed to the
//! HTTP layer and the stores at construction time, so nothing reaches into
//! ambient global state. A 401 anywhere clears the persisted fields and
//! broadcasts [`SessionEvent::Unauthorized`] for the application shell to
//! react to.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::types::{Role, Session};

pub const KEY_TOKEN: &str = "token";
pub const KEY_USERNAME: &str = "username";
pub const KEY_ROLE: &str = "role";
pub const KEY_EMAIL: &str = "email";

/// Durable key-value storage for session fields.
///
/// Mirrors the semantics of browser local storage: infallible reads,
/// best-effort writes, idempotent removes.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Default for tests and for embedders that persist the
/// session elsewhere.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

/// File-backed store: a flat JSON object written through on every mutation,
/// so the session survives process restarts the way a browser session
/// survives page reloads.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&self.path, text) {
                    tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session file");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session file"),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}

/// Out-of-band session signals emitted by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the current token. The persisted session has
    /// already been cleared; the shell should navigate to the login view.
    Unauthorized,
}

/// Shared handle over the session store plus the event channel.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionContext {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let (events, _) = broadcast::channel(8);
        Self { store, events }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN)
    }

    /// Read the full persisted session.
    pub fn load(&self) -> Session {
        Session {
            token: self.store.get(KEY_TOKEN),
            username: self.store.get(KEY_USERNAME).unwrap_or_default(),
            role: self.store.get(KEY_ROLE).and_then(|r| Role::parse(&r)),
            email: self.store.get(KEY_EMAIL).unwrap_or_default(),
        }
    }

    /// Write all four session fields. Absent token removes the entry so the
    /// logged-in invariant (token present ⇔ logged in) holds in storage too.
    pub fn persist(&self, session: &Session) {
        match &session.token {
            Some(token) => self.store.set(KEY_TOKEN, token),
            None => self.store.remove(KEY_TOKEN),
        }
        self.store.set(KEY_USERNAME, &session.username);
        match session.role {
            Some(role) => self.store.set(KEY_ROLE, role.as_str()),
            None => self.store.remove(KEY_ROLE),
        }
        self.store.set(KEY_EMAIL, &session.email);
    }

    /// Remove all four persisted fields. Idempotent; concurrent 401s may
    /// each trigger a redundant clear.
    pub fn clear(&self) {
        for key in [KEY_TOKEN, KEY_USERNAME, KEY_ROLE, KEY_EMAIL] {
            self.store.remove(key);
        }
    }

    /// Clear the session and notify subscribers. Called by the HTTP layer on
    /// any 401 response.
    pub(crate) fn handle_unauthorized(&self) {
        self.clear();
        // No subscribers is fine; the event is advisory.
        let _ = self.events.send(SessionEvent::Unauthorized);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("token_present", &self.token().is_some())
            .finish()
    }
}
