//! Landing page linking into the console.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="card">
                <h1 class="card__title">"SMS Console"</h1>
                <p class="card__subtitle">"Authentication, accounting and bulk SMS administration."</p>
                <ul class="link-list">
                    <li>
                        <A href="/login">"Login"</A>
                    </li>
                    <li>
                        <A href="/register">"Register"</A>
                    </li>
                    <li>
                        <A href="/sms">"Send SMS"</A>
                    </li>
                    <li>
                        <A href="/admin">"Admin Dashboard"</A>
                    </li>
                </ul>
            </div>
        </div>
    }
}
