//! Health-check HTTP client and CLI error types.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use async_trait::async_trait;
use healthboard_config::ClientConfig;
use healthboard_core::{
    CountSource, DateWindow, HealthCheckCount, HealthCheckCountResponse, HealthCheckJob,
};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const JOBS_SEGMENT: &str = "healthcheckjobs";

/// Failures raised by [`HealthCheckClient`].
#[derive(Debug, Error)]
pub(crate) enum ClientError {
    /// The base URL cannot carry path segments.
    #[error("base URL '{url}' cannot be extended with a path")]
    InvalidBaseUrl { url: String },
    /// The trace identifier is not a valid header value.
    #[error("trace identifier contains invalid characters")]
    InvalidTraceId,
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build {
        #[source]
        source: reqwest::Error,
    },
    /// Network, TLS, or timeout failure.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{url} returned status {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    /// The body did not match the expected shape.
    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the `healthcheckjobs` endpoint.
#[derive(Clone, Debug)]
pub(crate) struct HealthCheckClient {
    http: Client,
    base_url: Url,
}

impl HealthCheckClient {
    /// Build a client from explicit configuration.
    pub(crate) fn new(config: &ClientConfig, trace_id: &str) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        let request_id =
            HeaderValue::from_str(trace_id).map_err(|_| ClientError::InvalidTraceId)?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|source| ClientError::Build { source })?;

        Ok(Self::with_http(http, config.base_url.clone()))
    }

    /// Wrap an existing HTTP client.
    pub(crate) const fn with_http(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// URL queried by [`Self::fetch_counts`].
    pub(crate) fn counts_url(&self, window: Option<&DateWindow>) -> Result<Url, ClientError> {
        let mut url = endpoint_url(&self.base_url, JOBS_SEGMENT, false)?;
        if let Some(window) = window {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in window.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    /// `GET {base}/healthcheckjobs`, unwrapping the response envelope.
    pub(crate) async fn fetch_counts(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<HealthCheckCount>, ClientError> {
        let url = self.counts_url(window)?;
        let label = url.to_string();
        debug!(url = %label, "fetching health-check counts");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: label.clone(),
                source,
            })?;

        let bytes = read_success_body(response, &label).await?;
        let body = serde_json::from_slice::<HealthCheckCountResponse>(&bytes)
            .map_err(|source| ClientError::Decode { url: label, source })?;
        Ok(body.into_records())
    }

    /// `POST {base}/healthcheckjobs/` with a job report.
    pub(crate) async fn submit_job(&self, job: &HealthCheckJob) -> Result<(), ClientError> {
        let url = endpoint_url(&self.base_url, JOBS_SEGMENT, true)?;
        let label = url.to_string();
        debug!(url = %label, uuid = %job.uuid, checks = job.checks.len(), "submitting job report");

        let response = self
            .http
            .post(url)
            .json(job)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: label.clone(),
                source,
            })?;

        read_success_body(response, &label).await.map(|_| ())
    }
}

#[async_trait]
impl CountSource for HealthCheckClient {
    type Error = ClientError;

    async fn fetch_counts(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<HealthCheckCount>, Self::Error> {
        Self::fetch_counts(self, window).await
    }
}

/// Append `segment` to the base path, preserving any prefix such as `/v1`.
pub(crate) fn endpoint_url(
    base: &Url,
    segment: &str,
    trailing_slash: bool,
) -> Result<Url, ClientError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                url: base.to_string(),
            })?;
        segments.pop_if_empty().push(segment);
        if trailing_slash {
            segments.push("");
        }
    }
    url.set_query(None);
    Ok(url)
}

async fn read_success_body(
    response: reqwest::Response,
    label: &str,
) -> Result<Vec<u8>, ClientError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport {
            url: label.to_string(),
            source,
        })?;

    if status.is_success() {
        return Ok(bytes.to_vec());
    }

    Err(ClientError::Status {
        url: label.to_string(),
        status: status.as_u16(),
        message: problem_message(status, &bytes),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn problem_message(status: StatusCode, bytes: &[u8]) -> String {
    if let Ok(body) = serde_json::from_slice::<ErrorBody>(bytes) {
        return body.error;
    }
    let text = String::from_utf8_lossy(bytes).trim().to_string();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        text
    }
}

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status {
                status: 400,
                message,
                ..
            } => Self::Validation(message),
            other => Self::Failure(anyhow::Error::new(other)),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: HealthCheckClient,
}

/// Wrap a configuration failure for display.
pub(crate) fn config_failure(err: &healthboard_config::ConfigError) -> CliError {
    CliError::validation(err.detail())
}

/// Wrap a client construction failure for display.
pub(crate) fn setup_failure(err: ClientError) -> CliError {
    CliError::failure(anyhow!(err))
}
