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

//! Client configuration resolved once at startup and passed by value.
//!
//! Layout: `model.rs` (`ClientConfig`), `loader.rs` (environment resolution),
//! `validate.rs` (parsing helpers), `defaults.rs` (fallback values and
//! variable names), `error.rs` (`ConfigError`).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS,
    ENV_SYNC_APP_ID,
};
pub use error::{ConfigError, ConfigResult};
pub use model::ClientConfig;
