//! Protected items page: session gate + item loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it checks the session
//! store before anything else; only a present token leads to a network
//! call. The whole item list is replaced on every load.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::items_table::ItemsTable;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Item;
use crate::state::session::SessionStore;
use crate::util::auth::{GateDecision, gate_decision, install_session_gate};

/// Message for a non-2xx, non-401 items response.
#[cfg(any(test, feature = "hydrate"))]
const ITEMS_LOAD_ERROR: &str = "Error al cargar los datos. Intenta nuevamente.";
/// Message for transport or malformed-response failures.
#[cfg(any(test, feature = "hydrate"))]
const GENERIC_ITEMS_ERROR: &str = "Ocurrió un error. Intenta nuevamente.";

/// What the items page does once the protected request settles.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadOutcome {
    /// 2xx: replace the table contents with these rows.
    Render(Vec<Item>),
    /// 401: the stored token is no longer valid.
    EndSession,
    /// Any other failure: show a message, keep the page and the token.
    Fail(String),
}

/// Map the auth-client result onto page behavior.
///
/// Transport failures do not end the session: a flaky network proves
/// nothing about token validity, so the user stays on the page with the
/// token intact.
#[cfg(any(test, feature = "hydrate"))]
fn load_outcome(result: Result<Vec<Item>, ApiError>) -> LoadOutcome {
    match result {
        Ok(items) => LoadOutcome::Render(items),
        Err(ApiError::Unauthorized) => LoadOutcome::EndSession,
        Err(ApiError::Status(..)) => LoadOutcome::Fail(ITEMS_LOAD_ERROR.to_owned()),
        Err(ApiError::Network(_)) => LoadOutcome::Fail(GENERIC_ITEMS_ERROR.to_owned()),
    }
}

/// Items page — redirects to `/login` without a token, otherwise fetches
/// the protected listing once and renders it as a table.
#[component]
pub fn ItemsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let items = RwSignal::new(Vec::<Item>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // No token: redirect before any network call. The gate also fires
    // when the session is cleared after a rejected request.
    install_session_gate(session, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let GateDecision::Proceed(token) = gate_decision(session.token()) else {
            return;
        };
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_items(&token).await;
            if let Err(ApiError::Network(reason)) = &result {
                log::error!("items request failed: {reason}");
            }
            loading.set(false);
            match load_outcome(result) {
                LoadOutcome::Render(rows) => items.set(rows),
                // Clearing the token re-triggers the session gate, which
                // performs the redirect to /login.
                LoadOutcome::EndSession => session.clear(),
                LoadOutcome::Fail(message) => error.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    view! {
        <Show
            when=move || session.token().is_some()
            fallback=move || {
                view! {
                    <div class="items-page">
                        <p class="items-page__status">"Redirigiendo al inicio de sesión..."</p>
                    </div>
                }
            }
        >
            <div class="items-page">
                <header class="items-page__header">
                    <h1>"Inventario"</h1>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="items-page__error">{move || error.get()}</p>
                </Show>
                <Show when=move || error.get().is_empty()>
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <p class="items-page__status">"Cargando..."</p> }
                    >
                        <ItemsTable items=items/>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
