//! Operator notifications.
//!
//! Every form reports its outcome through a blocking browser alert. Failures
//! are also written to the console log with the underlying error so the
//! generic alert text stays the only thing the operator has to read.

/// Show a blocking success alert.
pub fn success(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("{message}");
        alert(message);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Show a blocking failure alert and log `detail` to the console.
pub fn failure(message: &str, detail: &dyn std::fmt::Display) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("{message}: {detail}");
        alert(message);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, detail);
    }
}

/// Show a blocking alert for a submit rejected before any request was sent.
pub fn invalid(message: &str) {
    #[cfg(feature = "hydrate")]
    alert(message);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
