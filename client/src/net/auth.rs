//! Auth service: login and signup against `/auth/*`.
//!
//! Both calls return the backend body as the session payload. Password rules,
//! hashing and rate limiting all live on the backend.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, HttpMethod, PreparedRequest};
use super::error::ApiError;
use super::types::{LoginRequest, Role, Session, SignupRequest};
use crate::util::storage::SessionStorage;

pub const LOGIN_FALLBACK: &str = "An error occurred during login.";
pub const SIGNUP_FALLBACK: &str = "An error occurred during signup.";

fn login_request<S: SessionStorage>(
    client: &ApiClient<S>,
    username: &str,
    password: &str,
) -> Result<PreparedRequest, ApiError> {
    client
        .request(HttpMethod::Post, "/auth/login")
        .with_json(&LoginRequest { username, password })
}

fn signup_request<S: SessionStorage>(
    client: &ApiClient<S>,
    username: &str,
    password: &str,
    role: Role,
) -> Result<PreparedRequest, ApiError> {
    client
        .request(HttpMethod::Post, "/auth/signup")
        .with_json(&SignupRequest { username, password, role })
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's message, or [`LOGIN_FALLBACK`].
pub async fn login<S: SessionStorage>(client: &ApiClient<S>, username: &str, password: &str) -> Result<Session, ApiError> {
    let request = login_request(client, username, password)?;
    client.send_json(request, LOGIN_FALLBACK).await
}

/// `POST /auth/signup`.
///
/// # Errors
///
/// Returns the backend's message, or [`SIGNUP_FALLBACK`].
pub async fn signup<S: SessionStorage>(
    client: &ApiClient<S>,
    username: &str,
    password: &str,
    role: Role,
) -> Result<Session, ApiError> {
    let request = signup_request(client, username, password, role)?;
    client.send_json(request, SIGNUP_FALLBACK).await
}
