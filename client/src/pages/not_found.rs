//! Catch-all route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">"404 Not Found"</div> }
}
