//! Build-time client configuration.
//!
//! The API origin is baked into the bundle when it is compiled; set
//! `BOOKHUB_API_BASE` in the build environment to point at another backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `BOOKHUB_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Base URL for every REST call, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("BOOKHUB_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
