//! Typed client configuration.

use std::time::Duration;

use url::Url;

use crate::defaults::DEFAULT_TIMEOUT_SECS;
use crate::error::ConfigResult;
use crate::validate::{parse_base_url, parse_timeout_secs};

/// Everything the data client needs to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are appended as segments.
    pub base_url: Url,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for an explicit base URL with the default timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Replace the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate raw values (typically from CLI flags) into a configuration.
    ///
    /// A missing or blank base URL resolves to the documented default.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL or timeout fails validation.
    pub fn resolve(base_url: Option<&str>, timeout_secs: u64) -> ConfigResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let timeout = parse_timeout_secs(timeout_secs)?;
        Ok(Self::new(base_url).with_timeout(timeout))
    }
}
