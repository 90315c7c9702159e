//! Admin form defining a new role.

#[cfg(test)]
#[path = "new_role_form_test.rs"]
mod new_role_form_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::NewRole;
use crate::state::session::SessionState;
use crate::util::form::{FormDraft, required, settle};
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewRoleDraft {
    pub name: String,
    pub description: String,
}

impl FormDraft for NewRoleDraft {
    type Payload = NewRole;

    fn validate(&self) -> Result<NewRole, &'static str> {
        let missing = "Role name and description are required.";
        Ok(NewRole {
            name: required(&self.name).ok_or(missing)?,
            description: required(&self.description).ok_or(missing)?,
        })
    }
}

/// `on_created` receives the new role name so the dashboard can refetch.
#[component]
pub fn NewRoleForm(#[prop(optional)] on_created: Option<Callback<String>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(NewRoleDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let role = match current.validate() {
            Ok(role) => role,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.create_role(&role).await;
            match &result {
                Ok(()) => {
                    notify::success(&format!("New role \"{}\" created successfully!", role.name));
                    if let Some(cb) = on_created {
                        cb.run(role.name.clone());
                    }
                }
                Err(e) => notify::failure(&e.alert_text("Failed to create role"), e),
            }
            draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    view! {
        <form class="console-form" on:submit=on_submit>
            <label class="form-label">
                "Role Name"
                <input
                    class="form-control"
                    type="text"
                    placeholder="Enter role name"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Description"
                <textarea
                    class="form-control"
                    placeholder="Enter role description"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--success" type="submit" disabled=move || busy.get()>
                "Create Role"
            </button>
        </form>
    }
}
