//! Networking modules for the BookHub REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the single configured sender, `auth` and `books` are the
//! domain services built on it, `types` defines the wire schema and `error`
//! the shared failure type.

pub mod auth;
pub mod books;
pub mod client;
pub mod error;
pub mod types;
