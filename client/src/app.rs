//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    signup::SignupPage, user_dashboard::UserDashboardPage,
};
use crate::state::session::AppSession;
use crate::util::guard::RouteRequirement;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AppSession::new(BrowserStorage));
    provide_context(session);

    // Effects only run in the browser, after hydration.
    Effect::new(move || session.update(AppSession::restore));

    view! {
        <Stylesheet id="leptos" href="/pkg/bookhub.css"/>
        <Title text="BookHub"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute requirement=RouteRequirement::Authenticated>
                                    <UserDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <ProtectedRoute requirement=RouteRequirement::Admin>
                                    <AdminDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
