//! Route wrapper that applies the guard before rendering its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision is recomputed whenever the session changes, so logging out on
//! a protected page redirects immediately. Nothing renders or redirects until
//! the persisted session has been restored in the browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;
use crate::util::guard::{GuardDecision, RouteRequirement};

#[component]
pub fn ProtectedRoute(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| session.with(|s| s.guard(requirement)));

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <p class="guard-status">
                        {move || if decision.get() == GuardDecision::Pending { "Loading..." } else { "Redirecting..." }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
