//! Session store for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AppSession>` context. Login/signup pages write
//! it, the navbar and route guard read it, and the HTTP wrapper reads the
//! persisted copy directly so requests always carry the latest token.
//!
//! SSR renders never see `localStorage`, so the store starts unrestored and
//! the browser calls [`SessionStore::restore`] once hydration has run. Guards
//! hold off redirecting until then.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;
use crate::util::guard::{GuardDecision, RouteRequirement};
use crate::util::storage::{BrowserStorage, SessionStorage, load_json, save_json};

/// `localStorage` key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "bookHubUser";

/// Store type used by the running app.
pub type AppSession = SessionStore<BrowserStorage>;

/// Single source of truth for the current session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
    restored: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty store that has not yet read persisted state.
    pub fn new(storage: S) -> Self {
        Self { storage, current: None, restored: false }
    }

    /// Store hydrated from persisted state.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Re-read the persisted session. Absent or unparsable data means signed out.
    pub fn restore(&mut self) {
        self.current = persisted_session(&self.storage);
        self.restored = true;
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Persist and publish `session`.
    pub fn login(&mut self, session: Session) {
        save_json(&self.storage, SESSION_KEY, &session);
        self.current = Some(session);
        self.restored = true;
    }

    /// Clear both the persisted and the published session.
    pub fn logout(&mut self) {
        self.storage.remove(SESSION_KEY);
        self.current = None;
        self.restored = true;
    }

    /// Guard decision for a route, pending until persisted state is read.
    pub fn guard(&self, requirement: RouteRequirement) -> GuardDecision {
        if !self.restored {
            return GuardDecision::Pending;
        }
        crate::util::guard::decide(requirement, self.current.as_ref())
    }
}

/// Read the persisted session straight from storage.
pub fn persisted_session(storage: &impl SessionStorage) -> Option<Session> {
    load_json(storage, SESSION_KEY)
}
