//! Configured HTTP sender shared by every domain service.
//!
//! SYSTEM CONTEXT
//! ==============
//! All requests are built through [`ApiClient::request`], the single place
//! that reads the persisted session and attaches `Authorization: Bearer`.
//! Building is pure so it can be tested natively; dispatch goes through
//! `gloo-net` in the browser and fails with a network error elsewhere.
//!
//! There is no retry, backoff or timeout. A failed request surfaces to the
//! caller immediately.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::Session;
use crate::state::session::persisted_session;
use crate::util::storage::{BrowserStorage, SessionStorage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully built request, ready to dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl PreparedRequest {
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a network-kind error if `body` cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::network(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// `Bearer <token>` for a session with a non-empty token. The token is sent
/// exactly as stored.
pub fn bearer_header(session: Option<&Session>) -> Option<String> {
    session
        .map(|s| s.token.as_str())
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// HTTP wrapper bound to one API origin and one session storage.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: String,
    storage: S,
}

impl ApiClient<BrowserStorage> {
    /// Client for the build-configured origin using `localStorage`.
    pub fn browser() -> Self {
        Self::new(crate::config::api_base_url(), BrowserStorage)
    }
}

impl<S: SessionStorage> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, storage: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, storage }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request for `path`, injecting the bearer token if one is stored.
    pub fn request(&self, method: HttpMethod, path: &str) -> PreparedRequest {
        let mut headers = Vec::new();
        if let Some(value) = bearer_header(persisted_session(&self.storage).as_ref()) {
            headers.push(("Authorization", value));
        }
        PreparedRequest { method, url: self.endpoint(path), query: Vec::new(), headers, body: None }
    }

    /// Dispatch and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// Returns the backend's message (or `fallback`) on a non-success status,
    /// and a network-kind error on transport or decode failure.
    pub async fn send_json<T: DeserializeOwned>(&self, request: PreparedRequest, fallback: &str) -> Result<T, ApiError> {
        let body = self.send(request, fallback).await?;
        decode_json(&body, fallback)
    }

    /// Dispatch and return the raw success body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send_json`] minus decoding.
    pub async fn send(&self, request: PreparedRequest, fallback: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            log::debug!("{:?} {}", request.method, request.url);
            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            let builder = if request.query.is_empty() {
                builder
            } else {
                builder.query(request.query.iter().map(|(key, value)| (*key, value.as_str())))
            };
            let builder = request
                .headers
                .iter()
                .fold(builder, |b, (key, value)| b.header(key, value));

            let sent = match &request.body {
                Some(body) => match builder.json(body) {
                    Ok(req) => req.send().await,
                    Err(e) => Err(e),
                },
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                log::warn!("{} {}: {e}", request.url, fallback);
                ApiError::network(fallback)
            })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            check_status(status, text, fallback)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, fallback);
            Err(ApiError::network("not available on server"))
        }
    }
}

/// Pass a 2xx body through; turn anything else into an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_status(status: u16, body: String, fallback: &str) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, &body, fallback))
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|_| ApiError::network(fallback))
}
