//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    accounting::AccountingPage, admin::AdminDashboardPage, home::HomePage, login::LoginPage,
    register::RegisterPage, send_sms::SendSmsPage, user_phones::UserPhonesPage,
};
use crate::state::session::{self, SessionState};
use crate::util::auth::Access;

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
/// Provides the session context and wraps privileged routes in the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Effects only run in the browser, so the stored token is read once
    // after hydration and the server render stays in the restoring state.
    Effect::new(move || session::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/sms-console.css"/>
        <Title text="SMS Console"/>

        <Router>
            <NavBar/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute access=Access::Admin><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("accounting")
                        view=|| view! { <ProtectedRoute access=Access::Admin><AccountingPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("sms")
                        view=|| view! { <ProtectedRoute access=Access::Authenticated><SendSmsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("phones")
                        view=|| view! { <ProtectedRoute access=Access::Authenticated><UserPhonesPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
