//! Session-token state shared by the login and items pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive a `SessionStore` from context instead of reaching into
//! localStorage themselves, so persistence stays in one place and native
//! tests can drive the store without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// localStorage key holding the session token. Absence means "not logged in".
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// In-memory session state mirrored to localStorage.
///
/// The token is opaque: created by a successful login, deleted when the
/// server rejects it. No expiry or refresh logic exists client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    /// Whether a protected request may be attempted at all.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Injected session-context object with get/set/clear operations.
///
/// Writes go through to localStorage so a reload restores the session;
/// reads come from the in-memory signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// Create a store seeded from localStorage (browser) or empty (server).
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session { token: load_token() }),
        }
    }

    /// Current token, if any. Reactive read.
    pub fn token(&self) -> Option<String> {
        self.session.get().token
    }

    /// Non-reactive read for use inside spawned tasks.
    pub fn token_untracked(&self) -> Option<String> {
        self.session.get_untracked().token
    }

    /// Store a freshly issued token.
    pub fn set_token(&self, token: String) {
        save_token(&token);
        self.session.update(|s| s.token = Some(token));
    }

    /// Drop the session, e.g. after the server rejects the token.
    pub fn clear(&self) {
        remove_token();
        self.session.update(|s| s.token = None);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the persisted token from localStorage.
fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
