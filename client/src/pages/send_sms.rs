//! Bulk SMS composer.
//!
//! Senders, receivers and track IDs are typed one per line. Each textarea
//! shows a live count of the entries that will actually be sent.

#[cfg(test)]
#[path = "send_sms_test.rs"]
mod send_sms_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{SmsBatch, SmsReceipt};
use crate::state::session::SessionState;
use crate::util::form::{FormDraft, settle};
use crate::util::lines::{count_lines, split_lines};
use crate::util::notify;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmsDraft {
    pub senders: String,
    pub receivers: String,
    pub track_ids: String,
    pub text: String,
}

impl FormDraft for SmsDraft {
    type Payload = SmsBatch;

    fn validate(&self) -> Result<SmsBatch, &'static str> {
        let missing = "Senders, receivers and text are required.";
        let senders = split_lines(&self.senders);
        let receivers = split_lines(&self.receivers);
        if senders.is_empty() || receivers.is_empty() || self.text.trim().is_empty() {
            return Err(missing);
        }
        Ok(SmsBatch { senders, receivers, text: self.text.clone(), track_ids: split_lines(&self.track_ids) })
    }
}

/// Success alert text, quoting the backend's message ID when it sent one.
pub fn receipt_message(receipt: &SmsReceipt) -> String {
    match receipt.message_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("SMS sent successfully! Message ID: {id}"),
        None => "SMS sent successfully!".to_owned(),
    }
}

#[component]
fn LinesField(
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_edit: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-label">
            {label}
            <span class="form-label__count">{move || format!(" ({} lines)", count_lines(&value.get()))}</span>
            <textarea
                class="form-control"
                rows="4"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SendSmsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(SmsDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let batch = match current.validate() {
            Ok(batch) => batch,
            Err(message) => {
                notify::invalid(message);
                return;
            }
        };
        busy.set(true);
        let client = ApiClient::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = client.send_sms(&batch).await;
            match &result {
                Ok(receipt) => notify::success(&receipt_message(receipt)),
                Err(e) => notify::failure(&e.alert_text("Failed to send SMS"), e),
            }
            draft.set(settle(&current, result.is_ok()));
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Send SMS"</h1>
            <form class="console-form panel" on:submit=on_submit>
                <LinesField
                    label="Senders"
                    placeholder="One sender per line"
                    value=Signal::derive(move || draft.get().senders)
                    on_edit=Callback::new(move |v: String| draft.update(|d| d.senders = v))
                />
                <LinesField
                    label="Receivers"
                    placeholder="One receiver per line"
                    value=Signal::derive(move || draft.get().receivers)
                    on_edit=Callback::new(move |v: String| draft.update(|d| d.receivers = v))
                />
                <LinesField
                    label="Track IDs"
                    placeholder="Optional, one per line"
                    value=Signal::derive(move || draft.get().track_ids)
                    on_edit=Callback::new(move |v: String| draft.update(|d| d.track_ids = v))
                />
                <label class="form-label">
                    "Message"
                    <textarea
                        class="form-control"
                        rows="5"
                        placeholder="Message text"
                        prop:value=move || draft.get().text
                        on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send SMS" }}
                </button>
            </form>
        </div>
    }
}
