//! REST API client for the login and items endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since both
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both pages consume the same `ApiError` split so the unauthorized case
//! stays distinguishable from transport trouble: a 401 must end the
//! session, a flaky network must not.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::LoginResponse;
use super::types::{Credentials, Item};

/// Path of the credential-exchange endpoint.
pub const LOGIN_ENDPOINT: &str = "/login";
/// Path of the protected items listing.
pub const ITEMS_ENDPOINT: &str = "/items";

/// Failure modes of the auth client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the presented token (HTTP 401).
    Unauthorized,
    /// Any other non-2xx status, with the response body text.
    Status(u16, String),
    /// Transport or JSON-parse failure before a usable response existed.
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a session token via `POST /login`.
///
/// # Errors
///
/// `Status` carries the plain-text body the server sends alongside rejected
/// credentials; `Network` covers transport and malformed-response failures.
/// A 401 here is an ordinary `Status`: no session exists yet to invalidate.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Issue a GET to a protected `path` with `Authorization: Bearer <token>`.
///
/// Returns the raw response so callers decide how to read the body.
///
/// # Errors
///
/// 401 maps to `ApiError::Unauthorized`; other non-2xx statuses to
/// `ApiError::Status`; transport failures to `ApiError::Network`.
#[cfg(feature = "hydrate")]
pub async fn fetch_protected(path: &str, token: &str) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::get(path)
        .header("Authorization", &bearer_header_value(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, body));
    }
    Ok(resp)
}

/// Fetch the protected items listing.
///
/// # Errors
///
/// Propagates `fetch_protected` errors; a well-formed response with a
/// malformed JSON body maps to `ApiError::Network`.
pub async fn fetch_items(token: &str) -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = fetch_protected(ITEMS_ENDPOINT, token).await?;
        resp.json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
