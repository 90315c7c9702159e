//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?} is not a valid number")]
    InvalidNumber { var: &'static str, value: String },

    /// The backend URL is not an absolute http(s) URL.
    #[error("invalid CONSOLE_BACKEND_URL: {0:?} must start with http:// or https://")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ProxyTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub port: u16,
    /// Backend REST base URL without a trailing slash. `None` disables the
    /// `/api` pass-through.
    pub backend_url: Option<String>,
    pub timeouts: ProxyTimeouts,
}

impl ConsoleConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONSOLE_BACKEND_URL`: pass-through target, unset disables it
    /// - `CONSOLE_PROXY_TIMEOUT_SECS`: default 30
    /// - `CONSOLE_PROXY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConsoleConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = lookup("CONSOLE_BACKEND_URL").map(|raw| parse_backend_url(&raw)).transpose()?.flatten();
        let timeouts = ProxyTimeouts {
            request_secs: parse_number(
                "CONSOLE_PROXY_TIMEOUT_SECS",
                lookup("CONSOLE_PROXY_TIMEOUT_SECS"),
                DEFAULT_PROXY_TIMEOUT_SECS,
            )?,
            connect_secs: parse_number(
                "CONSOLE_PROXY_CONNECT_TIMEOUT_SECS",
                lookup("CONSOLE_PROXY_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { port, backend_url, timeouts })
    }
}

/// Blank values count as unset.
fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value: value.to_owned() }),
    }
}

fn parse_backend_url(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(Some(trimmed.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
