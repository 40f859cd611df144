//! Landing page.

use leptos::prelude::*;

use crate::state::session::AppSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let dashboard = move || session.with(|s| s.current().map(|user| user.role.dashboard_path()));

    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Welcome to BookHub"</h1>
            <p class="home-page__subtitle">
                "Your personal digital library. Manage your collection as an admin, or browse the complete works as a user."
            </p>
            <div class="home-page__actions">
                {move || match dashboard() {
                    Some(path) => {
                        view! {
                            <a class="btn btn--primary" href=path>
                                "Go to Your Dashboard"
                            </a>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <a class="btn btn--primary" href="/login">
                                "Login"
                            </a>
                            <a class="btn" href="/signup">
                                "Sign Up"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
