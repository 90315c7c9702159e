//! Top navigation with the signed-in role and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::{self, SessionState};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let signed_in = move || session.get().token.is_some();
    let is_admin = move || session.get().claims.is_some_and(|c| c.is_admin());
    let role_label = move || session.get().role().unwrap_or_default().to_owned();

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "SMS Console"
            </A>
            <span class="nav-bar__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <A href="/login" attr:class="nav-bar__link">
                            "Login"
                        </A>
                        <A href="/register" attr:class="nav-bar__link">
                            "Register"
                        </A>
                    }
                }
            >
                <A href="/sms" attr:class="nav-bar__link">
                    "Send SMS"
                </A>
                <A href="/phones" attr:class="nav-bar__link">
                    "Phones"
                </A>
                <Show when=is_admin>
                    <A href="/admin" attr:class="nav-bar__link">
                        "Admin"
                    </A>
                    <A href="/accounting" attr:class="nav-bar__link">
                        "Accounting"
                    </A>
                </Show>
                <span class="nav-bar__role">{role_label}</span>
                // Router intercepts the anchor; dropping the session first
                // keeps the login page from bouncing back.
                <a href="/login" class="btn nav-bar__logout" on:click=move |_| session::sign_out(session)>
                    "Logout"
                </a>
            </Show>
        </nav>
    }
}
