//! Role `<select>` fed by the backend role list.

#[cfg(test)]
#[path = "role_select_test.rs"]
mod role_select_test;

use leptos::prelude::*;

use crate::net::types::Role;

pub const NO_ROLES_LABEL: &str = "Loading roles...";

/// What the role selector renders for a given role list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleOptions {
    /// A single disabled option; nothing is selectable.
    Placeholder(&'static str),
    Choices(Vec<String>),
}

pub fn role_options(roles: &[Role]) -> RoleOptions {
    if roles.is_empty() {
        return RoleOptions::Placeholder(NO_ROLES_LABEL);
    }
    RoleOptions::Choices(roles.iter().map(|r| r.name.clone()).collect())
}

/// Role picker bound to `value`. With `prompt`, an empty first option asks
/// the operator to choose explicitly.
#[component]
pub fn RoleSelect(
    roles: Signal<Vec<Role>>,
    value: Signal<String>,
    on_pick: Callback<String>,
    #[prop(optional)] prompt: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || value.get()
            disabled=move || roles.with(Vec::is_empty)
            on:change=move |ev| on_pick.run(event_target_value(&ev))
        >
            {move || match role_options(&roles.get()) {
                RoleOptions::Placeholder(label) => {
                    view! {
                        <option value="" disabled=true selected=true>
                            {label}
                        </option>
                    }
                        .into_any()
                }
                RoleOptions::Choices(names) => {
                    let prompt_option = prompt.map(|label| view! { <option value="">{label}</option> });
                    let options = names
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect::<Vec<_>>();
                    view! {
                        {prompt_option}
                        {options}
                    }
                        .into_any()
                }
            }}
        </select>
    }
}
