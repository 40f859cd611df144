//! Top navigation bar.
//!
//! Signed out: login/signup links. Signed in: a welcome line and a logout
//! button that clears the session and returns to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AppSession, SessionStore};
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "BookHub"
            </a>
            <div class="navbar__links">
                {move || match session.with(|s| s.current().cloned()) {
                    Some(user) => {
                        let navigate = navigate.clone();
                        view! {
                            <span class="navbar__welcome">
                                {format!("Welcome, {} ({})", user.username, user.role.as_str())}
                            </span>
                            <button
                                class="btn navbar__logout"
                                on:click=move |_| {
                                    session.update(SessionStore::logout);
                                    navigate(LOGIN_PATH, NavigateOptions::default());
                                }
                            >
                                "Logout"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                            <a class="navbar__link" href="/signup">
                                "Sign Up"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
