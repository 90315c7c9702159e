//! Admin form creating an account with a chosen role.

#[cfg(test)]
#[path = "new_user_form_test.rs"]
mod new_user_form_test;

use leptos::prelude::*;

use crate::components::role_select::RoleSelect;
use crate::net::api::ApiClient;
use crate::net::types::{NewAccount, Role};
use crate::state::admin::first_role_name;
use crate::state::session::SessionState;
use crate::util::form::{FormDraft, required, settle};
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUserDraft {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl FormDraft for NewUserDraft {
    type Payload = NewAccount;

    fn validate(&self) -> Result<NewAccount, &'static str> {
        let missing = "Username, password and role are required.";
        let username = required(&self.username).ok_or(missing)?;
        let role = required(&self.role).ok_or(missing)?;
        if self.password.is_empty() {
            return Err(missing);
        }
        Ok(NewAccount { username, password: self.password.clone(), role })
    }
}

#[component]
pub fn NewUserForm(roles: Signal<Vec<Role>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(NewUserDraft::default());
    let busy = RwSignal::new(false);

    // Keep a role selected: the first listed one until the operator picks.
    Effect::new(move || {
        let roles = roles.get();
        if draft.with(|d| d.role.is_empty()) {
            if let Some(first) = first_role_name(&roles) {
                let first = first.to_owned();
                draft.update(|d| d.role = first);
            }
        }
    });

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
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.create_user(&account).await;
            match &result {
                Ok(()) => notify::success(&format!("New user \"{}\" created successfully!", account.username)),
                Err(e) => notify::failure(&e.alert_text("Failed to create user"), e),
            }
            draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    let role_value = Signal::derive(move || draft.get().role);
    let on_role_pick = Callback::new(move |role: String| draft.update(|d| d.role = role));

    view! {
        <form class="console-form" on:submit=on_submit>
            <label class="form-label">
                "Username"
                <input
                    class="form-control"
                    type="text"
                    placeholder="Enter username"
                    prop:value=move || draft.get().username
                    on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Password"
                <input
                    class="form-control"
                    type="password"
                    placeholder="Enter password"
                    prop:value=move || draft.get().password
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Role" <RoleSelect roles=roles value=role_value on_pick=on_role_pick />
            </label>
            <button class="btn btn--success" type="submit" disabled=move || busy.get()>
                "Create User"
            </button>
        </form>
    }
}
