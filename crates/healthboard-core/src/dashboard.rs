//! Dashboard fetch lifecycle.
//!
//! # Design
//! - The fetch outcome is an explicit `FetchState`; failures are retained, never dropped.
//! - `Dashboard::load` borrows mutably, so one dashboard never has two loads in flight.
//! - Every load recomputes the summary from scratch; nothing is cached between loads.

use async_trait::async_trait;
use tracing::debug;

use crate::model::HealthCheckCount;
use crate::summary::{DashboardSummary, summarize};
use crate::window::DateWindow;

/// Backend capable of returning the current health-check counts.
#[async_trait]
pub trait CountSource: Send + Sync {
    /// Failure type surfaced by the source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the count records, optionally restricted to a date window.
    async fn fetch_counts(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<HealthCheckCount>, Self::Error>;
}

/// Lifecycle of a single asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T, E> {
    /// No result yet.
    Pending,
    /// The fetch completed and produced data.
    Succeeded(T),
    /// The fetch failed.
    Failed(E),
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T, E> FetchState<T, E> {
    /// Whether the fetch has not completed yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Data from a successful fetch.
    #[must_use]
    pub const fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// Error from a failed fetch.
    #[must_use]
    pub const fn failed(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Convert a terminal state into a `Result`; `None` while pending.
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Pending => None,
            Self::Succeeded(value) => Some(Ok(value)),
            Self::Failed(err) => Some(Err(err)),
        }
    }
}

/// View state for the summary panel and table.
pub struct Dashboard<S: CountSource> {
    source: S,
    state: FetchState<DashboardSummary, S::Error>,
}

impl<S: CountSource> Dashboard<S> {
    /// Create a dashboard that has not fetched yet.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            state: FetchState::Pending,
        }
    }

    /// Fetch once, summarize, and settle into a terminal state.
    pub async fn load(
        &mut self,
        window: Option<&DateWindow>,
    ) -> &FetchState<DashboardSummary, S::Error> {
        self.state = FetchState::Pending;
        self.state = match self.source.fetch_counts(window).await {
            Ok(records) => {
                let summary = summarize(&records);
                debug!(
                    records = records.len(),
                    total_count = summary.total_count,
                    total_failed = summary.total_failed,
                    "health-check counts summarized"
                );
                FetchState::Succeeded(summary)
            }
            Err(err) => {
                debug!(error = %err, "health-check count fetch failed");
                FetchState::Failed(err)
            }
        };
        &self.state
    }

    /// Current fetch state.
    #[must_use]
    pub const fn state(&self) -> &FetchState<DashboardSummary, S::Error> {
        &self.state
    }

    /// `(total_count, total_failed)`, or zeros until a fetch succeeds.
    #[must_use]
    pub fn totals(&self) -> (u64, u64) {
        self.state
            .succeeded()
            .map_or((0, 0), |summary| (summary.total_count, summary.total_failed))
    }

    /// Consume the dashboard, yielding its final state.
    pub fn into_state(self) -> FetchState<DashboardSummary, S::Error> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use tracing::Level;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            self.0
                .lock()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_at(level: Level) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    #[derive(Debug, thiserror::Error)]
    #[error("source unavailable")]
    struct Unavailable;

    struct StaticSource {
        records: Vec<HealthCheckCount>,
        windows: Mutex<Vec<Option<DateWindow>>>,
    }

    #[async_trait]
    impl CountSource for StaticSource {
        type Error = Unavailable;

        async fn fetch_counts(
            &self,
            window: Option<&DateWindow>,
        ) -> Result<Vec<HealthCheckCount>, Self::Error> {
            self.windows
                .lock()
                .map_err(|_| Unavailable)?
                .push(window.copied());
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CountSource for FailingSource {
        type Error = Unavailable;

        async fn fetch_counts(
            &self,
            _window: Option<&DateWindow>,
        ) -> Result<Vec<HealthCheckCount>, Self::Error> {
            Err(Unavailable)
        }
    }

    #[tokio::test]
    async fn load_transitions_to_succeeded() {
        let source = StaticSource {
            records: vec![
                HealthCheckCount {
                    name: "db".into(),
                    status: 1,
                    count: 5,
                },
                HealthCheckCount {
                    name: "cache".into(),
                    status: 2,
                    count: 3,
                },
            ],
            windows: Mutex::new(Vec::new()),
        };
        let mut dashboard = Dashboard::new(source);
        assert!(dashboard.state().is_pending());
        assert_eq!(dashboard.totals(), (0, 0));

        let state = dashboard.load(None).await;
        assert_eq!(state.succeeded().map(|s| s.summaries.len()), Some(2));
        assert_eq!(dashboard.totals(), (8, 3));
    }

    #[tokio::test]
    async fn load_forwards_window() -> Result<(), crate::WindowError> {
        let source = StaticSource {
            records: Vec::new(),
            windows: Mutex::new(Vec::new()),
        };
        let window = DateWindow::from_bounds(Some("2024-01-01"), Some("2024-01-02"))?;
        let mut dashboard = Dashboard::new(source);
        dashboard.load(window.as_ref()).await;

        let recorded = dashboard
            .source
            .windows
            .lock()
            .map(|windows| windows.clone())
            .unwrap_or_default();
        assert_eq!(recorded, vec![window]);
        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_zero_totals() {
        let mut dashboard = Dashboard::new(FailingSource);
        let state = dashboard.load(None).await;
        assert!(state.failed().is_some());
        assert_eq!(dashboard.totals(), (0, 0));
        assert!(matches!(dashboard.into_state().into_result(), Some(Err(_))));
    }

    #[tokio::test]
    async fn load_failure_is_silent_at_warn_level() {
        let (logs, _guard) = capture_at(Level::WARN);
        let mut dashboard = Dashboard::new(FailingSource);
        dashboard.load(None).await;
        assert!(dashboard.state().failed().is_some());
        assert_eq!(logs.text(), "");
    }

    #[tokio::test]
    async fn load_failure_is_logged_at_debug_level() {
        let (logs, _guard) = capture_at(Level::DEBUG);
        let mut dashboard = Dashboard::new(FailingSource);
        dashboard.load(None).await;
        assert!(logs.text().contains("health-check count fetch failed"));
    }

    #[test]
    fn pending_state_has_no_result() {
        let state: FetchState<DashboardSummary, Unavailable> = FetchState::default();
        assert!(state.is_pending());
        assert!(state.into_result().is_none());
    }
}
