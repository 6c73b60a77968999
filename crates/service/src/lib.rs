//! Service layer between the HTTP handlers and the remote store.
//! - Translates validated drafts into store writes and store rows back into
//!   typed entities (definitions live in the `models` crate).
//! - Owns the store client abstraction so handlers never touch HTTP details
//!   of the backend.

pub mod errors;
pub mod item_service;
pub mod store;
pub mod test_support;
pub mod user_service;
