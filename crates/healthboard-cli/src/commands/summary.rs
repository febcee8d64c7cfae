//! Dashboard summary command.

use anyhow::anyhow;
use healthboard_core::{Dashboard, DashboardSummary, DateWindow};

use crate::cli::{OutputFormat, SummaryArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_dashboard;

pub(crate) async fn handle_summary(
    ctx: &AppContext,
    args: &SummaryArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let summary = load_summary(ctx, args).await?;
    render_dashboard(&summary, format)
}

async fn load_summary(ctx: &AppContext, args: &SummaryArgs) -> CliResult<DashboardSummary> {
    let window = DateWindow::from_bounds(args.start_date.as_deref(), args.end_date.as_deref())
        .map_err(|err| CliError::validation(err.detail()))?;

    let mut dashboard = Dashboard::new(ctx.client.clone());
    dashboard.load(window.as_ref()).await;

    match dashboard.into_state().into_result() {
        Some(Ok(summary)) => Ok(summary),
        Some(Err(err)) => Err(CliError::from(err)),
        None => Err(CliError::failure(anyhow!("dashboard load did not complete"))),
    }
}
