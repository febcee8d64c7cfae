//! Job report submission command.

use std::fs;

use anyhow::anyhow;
use healthboard_core::{HealthCheckJob, PluginCheck};
use tracing::info;

use crate::cli::SubmitArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_submission;

pub(crate) async fn handle_submit(ctx: &AppContext, args: &SubmitArgs) -> CliResult<()> {
    let job = build_job(args)?;
    ctx.client.submit_job(&job).await?;
    info!(uuid = %job.uuid, checks = job.checks.len(), "job report submitted");
    render_submission(&job);
    Ok(())
}

fn build_job(args: &SubmitArgs) -> CliResult<HealthCheckJob> {
    let app_id = args
        .app_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CliError::validation("a sync app id is required (--app-id)"))?;

    let raw = fs::read_to_string(&args.file).map_err(|err| {
        CliError::failure(anyhow!(
            "failed to read {}: {err}",
            args.file.display()
        ))
    })?;
    let checks: Vec<PluginCheck> = serde_json::from_str(&raw).map_err(|err| {
        CliError::validation(format!(
            "{} must contain a JSON array of checks: {err}",
            args.file.display()
        ))
    })?;

    let job = HealthCheckJob::new(app_id, checks);
    job.validate()
        .map_err(|err| CliError::validation(err.detail()))?;
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HealthCheckClient;
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn context_with(server: &MockServer) -> AppContext {
        let base = format!("{}/v1", server.base_url())
            .parse()
            .expect("valid URL");
        AppContext {
            client: HealthCheckClient::with_http(Client::new(), base),
        }
    }

    fn checks_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write checks");
        file
    }

    fn args_for(file: &NamedTempFile, app_id: Option<&str>) -> SubmitArgs {
        SubmitArgs {
            file: file.path().to_path_buf(),
            app_id: app_id.map(str::to_string),
        }
    }

    #[test]
    fn build_job_reads_checks() {
        let file = checks_file(
            r#"[{"name":"DatabaseHealthCheck","status":1,"message":"working"},
                {"name":"DiskHealthCheck","status":2,"message":"disk full"}]"#,
        );
        let job = build_job(&args_for(&file, Some(" app-1 "))).expect("job should build");
        assert_eq!(job.sync_app_id, "app-1");
        assert_eq!(job.checks.len(), 2);
        assert_eq!(job.failing_checks(), 1);
    }

    #[test]
    fn missing_app_id_is_validation_error() {
        let file = checks_file(r#"[{"name":"a","status":1,"message":"ok"}]"#);
        let err = build_job(&args_for(&file, None)).expect_err("app id required");
        assert!(matches!(err, CliError::Validation(message) if message.contains("app id")));
    }

    #[test]
    fn malformed_file_is_validation_error() {
        let file = checks_file(r#"{"name":"a"}"#);
        let err = build_job(&args_for(&file, Some("app"))).expect_err("array required");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_check_list_is_rejected() {
        let file = checks_file("[]");
        let err = build_job(&args_for(&file, Some("app"))).expect_err("checks required");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unreadable_file_is_failure() {
        let args = SubmitArgs {
            file: PathBuf::from("/nonexistent/healthboard/checks.json"),
            app_id: Some("app".into()),
        };
        let err = build_job(&args).expect_err("missing file should fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn submit_posts_job_report() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/healthcheckjobs/")
                .header("content-type", "application/json");
            then.status(201).json_body(json!({"status": "created"}));
        });

        let file = checks_file(r#"[{"name":"DatabaseHealthCheck","status":1,"message":"working"}]"#);
        handle_submit(&context_with(&server), &args_for(&file, Some("app-1")))
            .await
            .expect("submit should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn rejected_submission_is_validation_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/v1/healthcheckjobs/");
            then.status(400).json_body(json!({"error": "sync_app_id unknown"}));
        });

        let file = checks_file(r#"[{"name":"DatabaseHealthCheck","status":1,"message":"working"}]"#);
        let err = handle_submit(&context_with(&server), &args_for(&file, Some("app-1")))
            .await
            .expect_err("400 should surface");
        assert!(matches!(err, CliError::Validation(message) if message == "sync_app_id unknown"));
    }
}
