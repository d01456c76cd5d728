//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render data handed down from pages; they never talk to the
//! network or the session store themselves.

pub mod items_table;
