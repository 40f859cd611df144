//! Login page: username/password form posting to the auth service.
//!
//! On success the session is stored and the user lands on their role's
//! dashboard; on failure the service's message is shown under the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Session;
use crate::state::session::{AppSession, SessionStore};
use crate::util::storage::SessionStorage;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

/// Store a fresh session and return where to navigate, or the message to show.
pub(crate) fn complete_sign_in<S: SessionStorage>(
    store: &mut SessionStore<S>,
    result: Result<Session, ApiError>,
) -> Result<&'static str, String> {
    match result {
        Ok(user) => {
            let path = user.role.dashboard_path();
            store.login(user);
            Ok(path)
        }
        Err(e) => {
            leptos::logging::warn!("sign-in failed: {e}");
            Err(e.message)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::login(&ApiClient::browser(), &user, &pass).await;
            match session.try_update(|s| complete_sign_in(s, result)) {
                Some(Ok(path)) => navigate(path, NavigateOptions::default()),
                Some(Err(message)) => error.set(Some(message)),
                None => {}
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label" for="username">"Username"</label>
                        <input
                            class="form-input"
                            type="text"
                            id="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            class="form-input"
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </form>
                <a class="auth-card__switch" href="/signup">
                    "Don't have an account? Sign Up"
                </a>
            </div>
        </div>
    }
}
