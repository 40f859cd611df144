//! Signup page: username, password and a user/admin role choice.
//!
//! A successful signup signs the user in immediately, exactly like login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::complete_sign_in;
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::types::Role;
use crate::state::session::AppSession;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing up..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
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
        let chosen = role.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::signup(&ApiClient::browser(), &user, &pass, chosen).await;
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
                <h2>"Sign Up"</h2>
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
                    <div class="form-group">
                        <span class="form-label">"Register as:"</span>
                        <div class="auth-form__roles">
                            <RoleOption role=role value=Role::User label="User"/>
                            <RoleOption role=role value=Role::Admin label="Admin"/>
                        </div>
                    </div>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </form>
                <a class="auth-card__switch" href="/login">
                    "Already have an account? Login"
                </a>
            </div>
        </div>
    }
}

#[component]
fn RoleOption(role: RwSignal<Role>, value: Role, label: &'static str) -> impl IntoView {
    view! {
        <label class="auth-form__role">
            <input
                type="radio"
                name="role"
                value=value.as_str()
                prop:checked=move || role.get() == value
                on:change=move |_| role.set(value)
            />
            " "
            {label}
        </label>
    }
}
