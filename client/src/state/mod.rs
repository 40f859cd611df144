//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `admin_books`, `catalog`) so pages
//! depend on small focused models. All of them are plain structs; pages wrap
//! them in `RwSignal`s.

pub mod admin_books;
pub mod catalog;
pub mod session;
