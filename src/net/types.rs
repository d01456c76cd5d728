//! Wire DTOs for the login and items endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads exactly so serde round-trips stay
//! lossless: the login body is `{"username","password"}`, the login reply
//! is `{"token"}`, and items arrive as a flat JSON array.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credential pair read from the login form at submit time.
///
/// Never persisted; dropped once the login request completes. Values are
/// passed through verbatim, without trimming or normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /login` reply.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token; the client never inspects its contents.
    pub token: String,
}

/// One row of the protected items listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    /// Nullable server-side; rendered as an empty cell when absent.
    #[serde(default)]
    pub description: Option<String>,
}
