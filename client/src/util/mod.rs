//! Browser storage, route access rules and text helpers used by the UI.

pub mod guard;
pub mod storage;
pub mod text;
