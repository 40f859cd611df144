//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (service calls, local form
//! state) and delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod user_dashboard;
