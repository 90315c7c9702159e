//! Login page: username, password and a backend captcha.
//!
//! DESIGN
//! ======
//! Backend captchas are single-use, so any failed attempt fetches a fresh
//! challenge and clears only the typed solution. A successful login hands
//! the token to the session and lands the operator by role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{API_BASE_URL, ApiClient};
use crate::net::types::LoginRequest;
use crate::state::session::{self, SessionState, SessionStatus, landing_route, now_secs};
use crate::util::form::{FormDraft, required};
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
    pub captcha_id: String,
    pub captcha_solution: String,
}

impl LoginDraft {
    /// Draft after the backend rejected an attempt: the spent challenge and
    /// its solution are dropped, the credentials stay.
    #[must_use]
    pub fn rejected(&self) -> Self {
        Self { captcha_id: String::new(), captcha_solution: String::new(), ..self.clone() }
    }
}

impl FormDraft for LoginDraft {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, &'static str> {
        let missing = "Username, password and captcha are required.";
        let username = required(&self.username).ok_or(missing)?;
        if self.password.is_empty() {
            return Err(missing);
        }
        let captcha_solution = required(&self.captcha_solution).ok_or(missing)?;
        let captcha_id = required(&self.captcha_id).ok_or("Captcha is still loading, please wait.")?;
        Ok(LoginRequest { username, password: self.password.clone(), captcha_id, captcha_solution })
    }
}

/// Fetch a new challenge into `draft`, replacing any spent one.
fn refresh_captcha(draft: RwSignal<LoginDraft>) {
    leptos::task::spawn_local(async move {
        match ApiClient::new(API_BASE_URL).new_captcha().await {
            Ok(challenge) => draft.update(|d| {
                d.captcha_id = challenge.captcha_id;
                d.captcha_solution.clear();
            }),
            Err(e) => notify::failure(&e.alert_text("Failed to load captcha"), &e),
        }
    });
}

fn retry(draft: RwSignal<LoginDraft>, attempt: &LoginDraft) {
    draft.set(attempt.rejected());
    refresh_captcha(draft);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(LoginDraft::default());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let nav_active = navigate.clone();
    Effect::new(move || {
        if let SessionStatus::Active(claims) = session.get().status(now_secs()) {
            nav_active(landing_route(claims), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Effect::new(move || refresh_captcha(draft));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let request = match current.validate() {
            Ok(request) => request,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match ApiClient::new(API_BASE_URL).login(&request).await {
                Ok(response) => match session::sign_in(session, response.token) {
                    Ok(claims) => {
                        #[cfg(feature = "hydrate")]
                        log::info!("signed in as {}", request.username);
                        draft.set(current.cleared());
                        navigate(landing_route(&claims), NavigateOptions::default());
                    }
                    Err(e) => {
                        notify::failure("Login failed: the server issued an unreadable token.", &e);
                        retry(draft, &current);
                    }
                },
                Err(e) => {
                    notify::failure(&e.alert_text("Login failed"), &e);
                    retry(draft, &current);
                }
            }
            busy.set(false);
        });
    };

    let captcha_src = move || {
        let id = draft.get().captcha_id;
        (!id.is_empty()).then(|| ApiClient::new(API_BASE_URL).captcha_image_url(&id))
    };

    view! {
        <div class="page page--centered">
            <div class="card">
                <h1 class="card__title">"Login"</h1>
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
                            autocomplete="current-password"
                            prop:value=move || draft.get().password
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                    </label>
                    <div class="captcha">
                        {move || match captcha_src() {
                            Some(src) => view! { <img class="captcha__image" src=src alt="captcha" /> }.into_any(),
                            None => view! { <span class="captcha__loading">"Loading captcha..."</span> }.into_any(),
                        }}
                        <button class="btn btn--link" type="button" on:click=move |_| refresh_captcha(draft)>
                            "New captcha"
                        </button>
                    </div>
                    <label class="form-label">
                        "Captcha"
                        <input
                            class="form-control"
                            type="text"
                            autocomplete="off"
                            prop:value=move || draft.get().captcha_solution
                            on:input=move |ev| draft.update(|d| d.captcha_solution = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
