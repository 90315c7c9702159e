//! Admin form registering a dynamic backend route.
//!
//! DESIGN
//! ======
//! Endpoints are typed one per line; blank lines are dropped before the
//! request is built, so a textarea holding only whitespace counts as empty.

#[cfg(test)]
#[path = "dynamic_route_form_test.rs"]
mod dynamic_route_form_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{DynamicRoute, RouteMethod};
use crate::state::session::SessionState;
use crate::util::form::{FormDraft, required, settle};
use crate::util::lines::split_lines;
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicRouteDraft {
    pub path: String,
    pub method: RouteMethod,
    pub endpoints: String,
    pub need_accounting: bool,
}

impl FormDraft for DynamicRouteDraft {
    type Payload = DynamicRoute;

    fn validate(&self) -> Result<DynamicRoute, &'static str> {
        let missing = "Path and at least one endpoint are required.";
        let path = required(&self.path).ok_or(missing)?;
        let endpoints = split_lines(&self.endpoints);
        if endpoints.is_empty() {
            return Err(missing);
        }
        Ok(DynamicRoute { path, method: self.method, endpoints, need_accounting: self.need_accounting })
    }
}

#[component]
pub fn DynamicRouteForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(DynamicRouteDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let route = match current.validate() {
            Ok(route) => route,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.create_dynamic_route(&route).await;
            match &result {
                Ok(()) => notify::success(&format!("Dynamic route {} {} created successfully!", route.method.as_str(), route.path)),
                Err(e) => notify::failure(&e.alert_text("Failed to create dynamic route"), e),
            }
            draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    view! {
        <form class="console-form" on:submit=on_submit>
            <label class="form-label">
                "Path"
                <input
                    class="form-control"
                    type="text"
                    placeholder="/custom/path"
                    prop:value=move || draft.get().path
                    on:input=move |ev| draft.update(|d| d.path = event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Method"
                <select
                    class="form-control"
                    prop:value=move || draft.get().method.as_str()
                    on:change=move |ev| draft.update(|d| d.method = RouteMethod::from_form_value(&event_target_value(&ev)))
                >
                    {RouteMethod::ALL
                        .into_iter()
                        .map(|method| {
                            view! {
                                <option
                                    value=method.as_str()
                                    selected=move || draft.get().method == method
                                >
                                    {method.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="form-label">
                "Endpoints (one per line)"
                <textarea
                    class="form-control"
                    rows="4"
                    placeholder="http://service-a:8080/handler"
                    prop:value=move || draft.get().endpoints
                    on:input=move |ev| draft.update(|d| d.endpoints = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || draft.get().need_accounting
                    on:change=move |ev| draft.update(|d| d.need_accounting = event_target_checked(&ev))
                />
                " Requires accounting"
            </label>
            <button class="btn btn--success" type="submit" disabled=move || busy.get()>
                "Create Route"
            </button>
        </form>
    }
}
