//! Login page exchanging credentials for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route that writes a token into the session store. On
//! success it hands off with a full navigation to `/` so the items page
//! starts from a fresh document with the token already persisted.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Credentials;
use crate::state::session::SessionStore;

/// Default message when the server rejects credentials without a body.
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_LOGIN_ERROR: &str = "Usuario o contraseña incorrectos";
/// Message for transport or malformed-response failures.
#[cfg(any(test, feature = "hydrate"))]
const GENERIC_LOGIN_ERROR: &str = "Ocurrió un error. Inténtalo de nuevo.";
/// Prompt shown instead of submitting an incomplete form.
const EMPTY_FIELDS_PROMPT: &str = "Introduce usuario y contraseña.";

/// Validate the form fields before issuing a request.
///
/// Values pass through verbatim: credentials are never trimmed or
/// normalized, since the password may legitimately contain edge whitespace.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(EMPTY_FIELDS_PROMPT);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Inline message for a failed login attempt.
///
/// The server's plain-text body is shown verbatim when present; empty
/// bodies and transport failures fall back to fixed messages.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(_, body) if !body.is_empty() => body.clone(),
        ApiError::Status(..) | ApiError::Unauthorized => DEFAULT_LOGIN_ERROR.to_owned(),
        ApiError::Network(_) => GENERIC_LOGIN_ERROR.to_owned(),
    }
}

/// Login page — posts credentials, stores the returned token, and
/// navigates to `/` on success. Failures stay on the page with an inline
/// message and never touch the session store.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(prompt) => {
                error.set(prompt.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(token) => {
                    session.set_token(token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    if let ApiError::Network(reason) = &err {
                        log::error!("login request failed: {reason}");
                    }
                    error.set(login_failure_message(&err));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Inventario"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
