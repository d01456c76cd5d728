//! Shared session-gate helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated behavior: no token
//! means an immediate redirect to `/login`, before any network call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

/// What a protected page should do before loading data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// A token exists; proceed with the protected request using it.
    Proceed(String),
    /// No token; redirect to `/login` without any network call.
    RedirectLogin,
}

/// Decide the gate outcome for a stored token.
pub fn gate_decision(token: Option<String>) -> GateDecision {
    match token {
        Some(token) => GateDecision::Proceed(token),
        None => GateDecision::RedirectLogin,
    }
}

/// Redirect to `/login` whenever the session has no token.
///
/// Also fires when the session is cleared later (e.g. after a 401), so
/// pages that end the session fall back to the login route automatically.
pub fn install_session_gate<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if gate_decision(session.token()) == GateDecision::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });
}
