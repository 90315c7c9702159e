//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one pooled `reqwest::Client` the backend pass-through uses and
//! the backend base URL, when one is configured.

use std::sync::Arc;

use crate::config::ConsoleConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Option<Arc<str>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: &ConsoleConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, backend_url: config.backend_url.as_deref().map(Arc::from) })
    }
}
