//! Browser localStorage access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `state::session` calls these helpers. Pages and the API client read
//! the token from the session context, never from storage directly.

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read the stored token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for later visits.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

