//! Book service: catalog listing and admin CRUD.
//!
//! Each operation is one HTTP call with no client-side caching. The backend
//! does the filter matching and scopes `/admin/books` to the caller.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use super::client::{ApiClient, HttpMethod, PreparedRequest};
use super::error::ApiError;
use super::types::{Book, BookFilters, BookInput, DeleteAck};
use crate::util::storage::SessionStorage;

pub const FETCH_ALL_FALLBACK: &str = "Error fetching books.";
pub const FETCH_MINE_FALLBACK: &str = "Error fetching your books.";
pub const ADD_FALLBACK: &str = "Error adding book.";
pub const UPDATE_FALLBACK: &str = "Error updating book.";
pub const DELETE_FALLBACK: &str = "Error deleting book.";

fn admin_book_path(id: &str) -> String {
    format!("/admin/books/{id}")
}

fn all_books_request<S: SessionStorage>(client: &ApiClient<S>, filters: &BookFilters) -> PreparedRequest {
    client.request(HttpMethod::Get, "/books").with_query(filters.query_pairs())
}

fn add_book_request<S: SessionStorage>(client: &ApiClient<S>, input: &BookInput) -> Result<PreparedRequest, ApiError> {
    client.request(HttpMethod::Post, "/admin/books").with_json(input)
}

fn update_book_request<S: SessionStorage>(
    client: &ApiClient<S>,
    id: &str,
    input: &BookInput,
) -> Result<PreparedRequest, ApiError> {
    client.request(HttpMethod::Put, &admin_book_path(id)).with_json(input)
}

/// Success bodies for delete vary; anything that is not an ack object counts
/// as a bare acknowledgement.
fn parse_delete_ack(body: &str) -> DeleteAck {
    serde_json::from_str(body).unwrap_or_default()
}

/// `GET /books` with the non-empty filter fields as query parameters.
///
/// # Errors
///
/// Returns the backend's message, or [`FETCH_ALL_FALLBACK`].
pub async fn get_all_books<S: SessionStorage>(client: &ApiClient<S>, filters: &BookFilters) -> Result<Vec<Book>, ApiError> {
    client.send_json(all_books_request(client, filters), FETCH_ALL_FALLBACK).await
}

/// `GET /admin/books`: books owned by the caller.
///
/// # Errors
///
/// Returns the backend's message, or [`FETCH_MINE_FALLBACK`].
pub async fn get_my_books<S: SessionStorage>(client: &ApiClient<S>) -> Result<Vec<Book>, ApiError> {
    let request = client.request(HttpMethod::Get, "/admin/books");
    client.send_json(request, FETCH_MINE_FALLBACK).await
}

/// `POST /admin/books`.
///
/// # Errors
///
/// Returns the backend's message, or [`ADD_FALLBACK`].
pub async fn add_book<S: SessionStorage>(client: &ApiClient<S>, input: &BookInput) -> Result<Book, ApiError> {
    let request = add_book_request(client, input)?;
    client.send_json(request, ADD_FALLBACK).await
}

/// `PUT /admin/books/:id`.
///
/// # Errors
///
/// Returns the backend's message, or [`UPDATE_FALLBACK`].
pub async fn update_book<S: SessionStorage>(client: &ApiClient<S>, id: &str, input: &BookInput) -> Result<Book, ApiError> {
    let request = update_book_request(client, id, input)?;
    client.send_json(request, UPDATE_FALLBACK).await
}

/// `DELETE /admin/books/:id`.
///
/// # Errors
///
/// Returns the backend's message, or [`DELETE_FALLBACK`].
pub async fn delete_book<S: SessionStorage>(client: &ApiClient<S>, id: &str) -> Result<DeleteAck, ApiError> {
    let request = client.request(HttpMethod::Delete, &admin_book_path(id));
    let body = client.send(request, DELETE_FALLBACK).await?;
    Ok(parse_delete_ack(&body))
}
