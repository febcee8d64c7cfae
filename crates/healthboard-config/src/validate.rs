//! Validation helpers and parsing utilities for configuration values.

use std::time::Duration;

use url::Url;

use crate::defaults::{DEFAULT_API_BASE_URL, MAX_TIMEOUT_SECS};
use crate::error::{ConfigError, ConfigResult};

/// Parse a backend base URL, falling back to the default for blank input.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not an absolute
/// `http`/`https` URL that can carry path segments.
pub fn parse_base_url(input: Option<&str>) -> ConfigResult<Url> {
    let raw = input
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL);

    let url = Url::parse(raw).map_err(|_| ConfigError::invalid("api_base_url", raw, "malformed"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            "api_base_url",
            raw,
            "unsupported_scheme",
        ));
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::invalid("api_base_url", raw, "not_a_base"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::invalid(
            "api_base_url",
            raw,
            "query_or_fragment",
        ));
    }
    Ok(url)
}

/// Validate a timeout expressed in whole seconds.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for zero or values above the maximum.
pub fn parse_timeout_secs(secs: u64) -> ConfigResult<Duration> {
    if secs == 0 {
        return Err(ConfigError::invalid("timeout_secs", "0", "zero"));
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::invalid(
            "timeout_secs",
            &secs.to_string(),
            "out_of_range",
        ));
    }
    Ok(Duration::from_secs(secs))
}
