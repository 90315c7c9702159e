//! # console-client
//!
//! Leptos + WASM frontend for the SMS gateway administration console.
//!
//! This crate contains pages, form components, session state, REST client
//! helpers, and the route guard. The `sms-console` host renders it on the
//! server (`ssr`) and the browser hydrates it (`hydrate`); every network call
//! goes to the external backend REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
