//! Environment-backed resolution of [`ClientConfig`].
//!
//! # Design
//! - The lookup is injected so resolution is testable without mutating the process environment.
//! - The CLI supplies the process environment with its flags substituted; nothing here caches it.

use tracing::debug;

use crate::defaults::{DEFAULT_TIMEOUT_SECS, ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS};
use crate::error::{ConfigError, ConfigResult};
use crate::model::ClientConfig;

impl ClientConfig {
    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_BASE_URL);
        let timeout_secs = match lookup(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid("timeout_secs", &raw, "not_an_integer"))?,
            _ => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self::resolve(base_url.as_deref(), timeout_secs)?;
        debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "client configuration resolved"
        );
        Ok(config)
    }
}
