use super::*;
use crate::net::error::ErrorKind;
use crate::net::types::{Book, Role};
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn signed_in_storage(token: &str) -> MemoryStorage {
    let storage = MemoryStorage::new();
    SessionStore::open(storage.clone()).login(Session {
        id: "u1".to_owned(),
        username: "ann".to_owned(),
        role: Role::Admin,
        token: token.to_owned(),
    });
    storage
}

#[test]
fn endpoint_joins_base_and_path() {
    let client = ApiClient::new("http://localhost:5000/api/", MemoryStorage::new());
    assert_eq!(client.endpoint("/books"), "http://localhost:5000/api/books");
    assert_eq!(client.endpoint("admin/books/7"), "http://localhost:5000/api/admin/books/7");
}

#[test]
fn request_without_session_has_no_authorization() {
    let client = ApiClient::new("http://api", MemoryStorage::new());
    let req = client.request(HttpMethod::Get, "/books");
    assert_eq!(req.header("authorization"), None);
    assert!(req.headers.is_empty());
}

#[test]
fn request_with_session_carries_bearer_token() {
    let client = ApiClient::new("http://api", signed_in_storage("abc.def"));
    let req = client.request(HttpMethod::Delete, "/admin/books/1");
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.header("Authorization"), Some("Bearer abc.def"));
}

#[test]
fn request_reads_session_fresh_each_time() {
    let storage = MemoryStorage::new();
    let client = ApiClient::new("http://api", storage.clone());
    assert_eq!(client.request(HttpMethod::Get, "/books").header("Authorization"), None);

    let mut store = SessionStore::open(storage);
    store.login(Session { id: "u".to_owned(), username: "u".to_owned(), role: Role::User, token: "t1".to_owned() });
    assert_eq!(client.request(HttpMethod::Get, "/books").header("Authorization"), Some("Bearer t1"));

    store.logout();
    assert_eq!(client.request(HttpMethod::Get, "/books").header("Authorization"), None);
}

#[test]
fn empty_token_is_not_sent() {
    let client = ApiClient::new("http://api", signed_in_storage(""));
    assert_eq!(client.request(HttpMethod::Get, "/admin/books").header("Authorization"), None);
}

#[test]
fn token_is_sent_unchanged() {
    let client = ApiClient::new("http://api", signed_in_storage(" abc.def "));
    assert_eq!(client.request(HttpMethod::Get, "/admin/books").header("Authorization"), Some("Bearer  abc.def "));
}

#[test]
fn with_json_sets_body() {
    let client = ApiClient::new("http://api", MemoryStorage::new());
    let req = client
        .request(HttpMethod::Post, "/auth/login")
        .with_json(&serde_json::json!({ "username": "ann" }))
        .unwrap();
    assert_eq!(req.body, Some(serde_json::json!({ "username": "ann" })));
}

#[test]
fn check_status_passes_success_and_rejects_failure() {
    assert_eq!(check_status(201, "{}".to_owned(), "f"), Ok("{}".to_owned()));
    let err = check_status(401, r#"{"message":"Not authorized, token failed"}"#.to_owned(), "f").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message, "Not authorized, token failed");
}

#[test]
fn decode_json_failure_uses_fallback() {
    let err = decode_json::<Vec<Book>>("not json", "Error fetching books.").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.message, "Error fetching books.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_outside_browser_is_a_network_error() {
    let client = ApiClient::new("http://api", MemoryStorage::new());
    let req = client.request(HttpMethod::Get, "/books");
    let result = futures::executor::block_on(client.send(req, "Error fetching books."));
    assert_eq!(result.unwrap_err().kind, ErrorKind::Network);
}
