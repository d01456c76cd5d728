//! # items-client
//!
//! Leptos + WASM front-end for the login-gated items listing.
//!
//! Two routes: `/login` exchanges credentials for a session token, `/`
//! shows the protected items table. The server is reached only through
//! `POST /login` and `GET /items`; everything else lives in the browser.
//!
//! Browser-only behavior (fetch, localStorage, navigation) is gated behind
//! the `hydrate` feature so the pure logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
