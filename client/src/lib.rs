//! # client
//!
//! Leptos + WASM frontend for the BookHub catalog.
//!
//! This crate contains pages, components, session state, the book/auth
//! service layer and the route guard. The `hydrate` feature builds the browser
//! bundle; `ssr` lets the `bookhub` host render the same component tree.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
