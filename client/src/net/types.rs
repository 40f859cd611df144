//! Wire DTOs exchanged with the BookHub REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON (`imageUrl`, `role`) so serde can decode
//! responses directly. Document ids are accepted as either `id` or `_id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role issued by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages their own book collection.
    Admin,
    /// Browses the public catalog. Unknown roles decode to this.
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    /// Wire/display label (`"user"` or `"admin"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Landing route after login for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::User => "/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }
}

/// Authenticated identity returned by login/signup and persisted locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub role: Role,
    /// Opaque bearer token replayed on every request.
    pub token: String,
}

/// A catalog entry as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// Writable book fields, used for create/update bodies and form drafts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub description: String,
    pub image_url: String,
}

impl BookInput {
    /// Draft pre-filled from an existing book (edit modal).
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            image_url: book.image_url.clone(),
        }
    }
}

/// Catalog filter criteria; `None` fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BookFilters {
    /// Keep only the inputs that are non-empty after trimming.
    pub fn from_inputs(author: &str, title: &str, description: &str) -> Self {
        Self { author: non_empty(author), title: non_empty(title), description: non_empty(description) }
    }

    /// Query parameters in a stable `author`, `title`, `description` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [("author", &self.author), ("title", &self.title), ("description", &self.description)]
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
            .collect()
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Backend acknowledgement for `DELETE /admin/books/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Signup request body.
#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: Role,
}
