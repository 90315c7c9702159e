//! Self-service registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{API_BASE_URL, ApiClient};
use crate::net::types::NewAccount;
use crate::state::session::LOGIN_ROUTE;
use crate::util::form::{FormDraft, required, settle};
use crate::util::notify;

/// Roles a visitor may pick when registering.
pub const REGISTER_ROLES: [&str; 2] = ["user", "admin"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self { username: String::new(), password: String::new(), role: REGISTER_ROLES[0].to_owned() }
    }
}

impl FormDraft for RegisterDraft {
    type Payload = NewAccount;

    fn validate(&self) -> Result<NewAccount, &'static str> {
        let missing = "Username and password are required.";
        let username = required(&self.username).ok_or(missing)?;
        if self.password.is_empty() {
            return Err(missing);
        }
        let role = REGISTER_ROLES
            .into_iter()
            .find(|r| *r == self.role.trim())
            .ok_or("Please choose a valid role.")?;
        Ok(NewAccount { username, password: self.password.clone(), role: role.to_owned() })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(RegisterDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let account = match current.validate() {
            Ok(account) => account,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = ApiClient::new(API_BASE_URL).register(&account).await;
            match &result {
                Ok(()) => notify::success("Registration successful! Please log in."),
                Err(e) => notify::failure(&e.alert_text("Registration failed"), e),
            }
            draft.set(settle(&current, result.is_ok()));
            busy.set(false);
            if result.is_ok() {
                navigate(LOGIN_ROUTE, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="page page--centered">
            <div class="card">
                <h1 class="card__title">"Register"</h1>
                <form class="console-form" on:submit=on_submit>
                    <label class="form-label">
                        "Username"
                        <input
                            class="form-control"
                            type="text"
                            autocomplete="username"
                            prop:value=move || draft.get().username
                            on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Password"
                        <input
                            class="form-control"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || draft.get().password
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Role"
                        <select
                            class="form-select"
                            prop:value=move || draft.get().role
                            on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                        >
                            {REGISTER_ROLES
                                .into_iter()
                                .map(|role| view! { <option value=role>{role}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
