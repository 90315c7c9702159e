//! Route guard wrapper for privileged pages.
//!
//! Renders its children only while the session satisfies `access`; every
//! other state redirects through [`install_guard_redirect`]. This decides
//! what the browser shows, not what the operator may do: the backend
//! checks the token on each call.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, now_secs};
use crate::util::auth::{Access, GuardDecision, guard_decision, install_guard_redirect};

#[component]
pub fn ProtectedRoute(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_guard_redirect(access, session, use_navigate());

    let allowed = move || guard_decision(access, &session.get(), now_secs()) == GuardDecision::Render;

    view! {
        <Show
            when=allowed
            fallback=move || {
                view! {
                    <div class="page page--centered">
                        <p>{move || if session.get().restored { "Redirecting..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
