//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and book widgets. Shared state comes from the
//! session context; everything else is passed in as props and callbacks.

pub mod book_card;
pub mod book_form;
pub mod edit_book_modal;
pub mod filter_sidebar;
pub mod navbar;
pub mod protected_route;
