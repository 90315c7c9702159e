//! Admin dashboard: users, role and charge updates, and the create forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute` with `Access::Admin`. Users and roles are
//! fetched once on mount into a page-scoped [`AdminState`]; role changes are
//! patched into it locally once the backend accepts them.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::dynamic_route_form::DynamicRouteForm;
use crate::components::new_role_form::NewRoleForm;
use crate::components::new_user_form::NewUserForm;
use crate::components::role_select::RoleSelect;
use crate::net::api::ApiClient;
use crate::net::types::{ChargeUpdate, RoleChange, User};
use crate::state::admin::AdminState;
use crate::state::session::SessionState;
use crate::util::form::{FormDraft, required, settle};
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleChangeDraft {
    pub username: String,
    pub role: String,
}

impl FormDraft for RoleChangeDraft {
    type Payload = (String, RoleChange);

    fn validate(&self) -> Result<(String, RoleChange), &'static str> {
        let missing = "Please select both a user and a new role.";
        let username = required(&self.username).ok_or(missing)?;
        let role = required(&self.role).ok_or(missing)?;
        Ok((username, RoleChange { role }))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChargeDraft {
    pub username: String,
    /// Raw input text; parsed on submit.
    pub charge: String,
}

impl FormDraft for ChargeDraft {
    type Payload = (String, ChargeUpdate);

    fn validate(&self) -> Result<(String, ChargeUpdate), &'static str> {
        let missing = "Please select a user and specify a charge amount.";
        let username = required(&self.username).ok_or(missing)?;
        let raw = required(&self.charge).ok_or(missing)?;
        let charge = raw
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or("Charge must be a number.")?;
        Ok((username, ChargeUpdate { charge }))
    }
}

/// Fetch users and roles into `state`. Each list fails independently.
fn load(session: RwSignal<SessionState>, state: RwSignal<AdminState>) {
    let client = ApiClient::for_session(&session.get_untracked());
    leptos::task::spawn_local(async move {
        match client.list_users().await {
            Ok(users) => state.update(|s| s.users = users),
            Err(e) => notify::failure(&e.alert_text("Failed to fetch users"), &e),
        }
        match client.list_roles().await {
            Ok(roles) => state.update(|s| s.roles = roles),
            Err(e) => notify::failure(&e.alert_text("Failed to fetch roles"), &e),
        }
    });
}

#[component]
fn UserSelect(users: Signal<Vec<User>>, value: Signal<String>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || value.get()
            on:change=move |ev| on_pick.run(event_target_value(&ev))
        >
            <option value="">"Select user"</option>
            {move || {
                users
                    .get()
                    .into_iter()
                    .map(|u| view! { <option value=u.username.clone()>{u.username.clone()}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(AdminState::default());
    let role_draft = RwSignal::new(RoleChangeDraft::default());
    let charge_draft = RwSignal::new(ChargeDraft::default());
    let busy = RwSignal::new(false);

    Effect::new(move || load(session, state));

    let users = Signal::derive(move || state.get().users);
    let roles = Signal::derive(move || state.get().roles);

    let on_role_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = role_draft.get_untracked();
        let (username, change) = match current.validate() {
            Ok(payload) => payload,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.change_role(&username, &change).await;
            match &result {
                Ok(()) => {
                    state.update(|s| {
                        s.apply_role_change(&username, &change.role);
                    });
                    notify::success(&format!("Role of \"{username}\" updated to \"{}\".", change.role));
                }
                Err(e) => notify::failure(&e.alert_text("Failed to update role"), e),
            }
            role_draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    let on_charge_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = charge_draft.get_untracked();
        let (username, update) = match current.validate() {
            Ok(payload) => payload,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.set_charge(&username, &update).await;
            match &result {
                Ok(()) => notify::success(&format!("Charge for \"{username}\" set to {}.", update.charge)),
                Err(e) => notify::failure(&e.alert_text("Failed to update charge"), e),
            }
            charge_draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    let on_role_created = Callback::new(move |_name: String| load(session, state));

    view! {
        <div class="page">
            <h1 class="page__title">"Admin Dashboard"</h1>

            <section class="panel">
                <h2 class="panel__title">"Users"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Role"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.get().users
                            key=|u| (u.username.clone(), u.role.clone())
                            children=|u| {
                                view! {
                                    <tr>
                                        <td>{u.username}</td>
                                        <td>{u.role}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Change Role"</h2>
                <form class="console-form" on:submit=on_role_submit>
                    <UserSelect
                        users=users
                        value=Signal::derive(move || role_draft.get().username)
                        on_pick=Callback::new(move |name: String| role_draft.update(|d| d.username = name))
                    />
                    <RoleSelect
                        roles=roles
                        value=Signal::derive(move || role_draft.get().role)
                        on_pick=Callback::new(move |role: String| role_draft.update(|d| d.role = role))
                        prompt="Select new role"
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update Role"
                    </button>
                </form>
            </section>

            <section class="panel">
                <h2 class="panel__title">"User Charge"</h2>
                <form class="console-form" on:submit=on_charge_submit>
                    <UserSelect
                        users=users
                        value=Signal::derive(move || charge_draft.get().username)
                        on_pick=Callback::new(move |name: String| charge_draft.update(|d| d.username = name))
                    />
                    <input
                        class="form-control"
                        type="number"
                        step="any"
                        placeholder="Charge amount"
                        prop:value=move || charge_draft.get().charge
                        on:input=move |ev| charge_draft.update(|d| d.charge = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update Charge"
                    </button>
                </form>
            </section>

            <section class="panel">
                <h2 class="panel__title">"New Role"</h2>
                <NewRoleForm on_created=on_role_created />
            </section>

            <section class="panel">
                <h2 class="panel__title">"New User"</h2>
                <NewUserForm roles=roles />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Dynamic Route"</h2>
                <DynamicRouteForm />
            </section>
        </div>
    }
}
