//! Networking modules for the HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single auth client both pages go through; `types` defines
//! the shared wire schema. The login and session-check flows deliberately
//! share one module so their error handling cannot diverge.

pub mod api;
pub mod types;
