#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Health-check records, the working/failing aggregation, and dashboard state.
//!
//! Layout: `model.rs` (wire records and derived summaries), `summary.rs`
//! (classification and totals), `dashboard.rs` (fetch lifecycle), `job.rs`
//! (job reports submitted by monitoring agents), `window.rs` (date filters),
//! `error.rs` (validation errors).

pub mod dashboard;
pub mod error;
pub mod job;
pub mod model;
pub mod summary;
pub mod window;

pub use dashboard::{CountSource, Dashboard, FetchState};
pub use error::{JobValidationError, WindowError};
pub use job::{HealthCheckJob, PluginCheck};
pub use model::{CheckStatus, HealthCheckCount, HealthCheckCountResponse, HealthCheckSummary};
pub use summary::{DashboardSummary, WORKING_STATUS_ID, classify, summarize};
pub use window::DateWindow;
