//! Fallback values and environment variable names.
//!
//! # Design
//! - One documented default base URL; blank values fall back to it as well.

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/v1";
/// Per-request timeout applied to the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted for the request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Variable holding the backend base URL.
pub const ENV_API_BASE_URL: &str = "HEALTHBOARD_API_BASE_URL";
/// Variable holding the request timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HEALTHBOARD_HTTP_TIMEOUT_SECS";
/// Variable holding the service identifier attached to job reports.
pub const ENV_SYNC_APP_ID: &str = "HEALTHBOARD_SYNC_APP_ID";
