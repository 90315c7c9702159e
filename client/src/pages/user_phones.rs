//! Phone numbers registered to the signed-in operator.

#[cfg(test)]
#[path = "user_phones_test.rs"]
mod user_phones_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::util::notify;

/// Rows keyed by position; the backend may list the same number twice.
pub fn phone_rows(phones: Vec<String>) -> Vec<(usize, String)> {
    phones.into_iter().enumerate().collect()
}

#[component]
pub fn UserPhonesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let phones = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match client.list_phones().await {
                Ok(list) => phones.set(list),
                Err(e) => notify::failure(&e.alert_text("Failed to fetch phone numbers"), &e),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page">
            <h1 class="page__title">"Your Phone Numbers"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
                <Show
                    when=move || !phones.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No phone numbers found."</p> }
                >
                    <ul class="list">
                        <For
                            each=move || phone_rows(phones.get())
                            key=|(index, _)| *index
                            children=|(_, phone)| view! { <li class="list__item">{phone}</li> }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
