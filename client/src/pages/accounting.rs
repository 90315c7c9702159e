//! Read-only list of per-endpoint accounting rules.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::AccountingRule;
use crate::state::session::SessionState;
use crate::util::notify;

#[component]
pub fn AccountingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rules = RwSignal::new(Vec::<AccountingRule>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match client.list_rules().await {
                Ok(list) => rules.set(list),
                Err(e) => notify::failure(&e.alert_text("Failed to fetch accounting rules"), &e),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page">
            <h1 class="page__title">"Accounting Rules"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
                <Show
                    when=move || !rules.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No accounting rules defined."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Endpoint"</th>
                                <th>"Charge"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rules
                                    .get()
                                    .into_iter()
                                    .map(|rule| {
                                        view! {
                                            <tr>
                                                <td>{rule.endpoint}</td>
                                                <td>{rule.charge.to_string()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
