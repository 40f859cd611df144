use super::*;
use crate::net::error::ErrorKind;
use crate::net::types::Role;
use crate::state::session::{SESSION_KEY, persisted_session};
use crate::util::storage::MemoryStorage;

fn make_session(role: Role) -> Session {
    Session { id: "u1".to_owned(), username: "ann".to_owned(), role, token: "tok-1".to_owned() }
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

#[test]
fn admin_sign_in_persists_session_and_lands_on_admin_dashboard() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());

    let outcome = complete_sign_in(&mut store, Ok(make_session(Role::Admin)));

    assert_eq!(outcome, Ok("/admin/dashboard"));
    assert_eq!(store.current(), Some(&make_session(Role::Admin)));
    assert_eq!(persisted_session(&storage), Some(make_session(Role::Admin)));
}

#[test]
fn user_sign_in_lands_on_user_dashboard() {
    let mut store = SessionStore::open(MemoryStorage::new());
    assert_eq!(complete_sign_in(&mut store, Ok(make_session(Role::User))), Ok("/dashboard"));
}

#[test]
fn failed_sign_in_returns_message_and_stores_nothing() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    let err = ApiError { kind: ErrorKind::Validation, message: "Invalid username or password".to_owned() };

    let outcome = complete_sign_in(&mut store, Err(err));

    assert_eq!(outcome, Err("Invalid username or password".to_owned()));
    assert_eq!(store.current(), None);
    assert_eq!(storage.read(SESSION_KEY), None);
}
