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

//! Binary entrypoint for the `healthboard` CLI.

use std::process::ExitCode;

/// Runs the selected command and maps its result to the process exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let code = healthboard_cli::run().await;
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
