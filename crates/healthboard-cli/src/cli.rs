//! Command-line surface for the health-check dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use healthboard_config::{
    ClientConfig, ConfigResult, ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS, ENV_SYNC_APP_ID,
};
use healthboard_telemetry::{ENV_LOG_FORMAT, LoggingConfig, build_sha, init_logging};
use tracing::info;
use uuid::Uuid;

use crate::client::{AppContext, CliResult, HealthCheckClient, config_failure, setup_failure};
use crate::commands::submit::handle_submit;
use crate::commands::summary::handle_summary;

#[derive(Clone)]
struct CliDependencies {
    client: HealthCheckClient,
}

impl CliDependencies {
    fn from_env(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let config = resolve_config(cli, |name| std::env::var(name).ok())
            .map_err(|err| config_failure(&err))?;
        let client = HealthCheckClient::new(&config, trace_id).map_err(setup_failure)?;
        Ok(Self { client })
    }
}

/// Resolve client configuration from the environment, with explicit flags
/// taking precedence over the matching variables.
fn resolve_config<F>(cli: &Cli, lookup: F) -> ConfigResult<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    ClientConfig::from_lookup(|name| match name {
        ENV_API_BASE_URL if cli.api_url.is_some() => cli.api_url.clone(),
        ENV_HTTP_TIMEOUT_SECS if cli.timeout.is_some() => {
            cli.timeout.map(|secs| secs.to_string())
        }
        other => lookup(other),
    })
}

/// Parses CLI arguments, executes the requested command, and reports
/// failures on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let format_override = std::env::var(ENV_LOG_FORMAT).ok();
    let logging = LoggingConfig::with_format_override(format_override.as_deref());
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: logging disabled: {err}");
    }

    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    let deps = match CliDependencies::from_env(&cli, &trace_id) {
        Ok(deps) => deps,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };
    info!(command = command_name, trace_id = %trace_id, build = build_sha(), "running command");

    match dispatch(cli, &deps).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli, deps: &CliDependencies) -> CliResult<()> {
    let ctx = AppContext {
        client: deps.client.clone(),
    };

    match cli.command {
        Command::Summary(args) => handle_summary(&ctx, &args, cli.output).await,
        Command::Submit(args) => handle_submit(&ctx, &args).await,
    }
}

#[derive(Parser)]
#[command(
    name = "healthboard",
    about = "Dashboard for health-check job results",
    version
)]
struct Cli {
    /// Backend base URL; overrides `HEALTHBOARD_API_BASE_URL`. Blank means the local default.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Per-request timeout in seconds; overrides `HEALTHBOARD_HTTP_TIMEOUT_SECS` (default 10).
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch job counts and render the dashboard.
    Summary(SummaryArgs),
    /// Report a batch of plugin check results.
    Submit(SubmitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SummaryArgs {
    /// First day of the reporting window (YYYY-MM-DD).
    #[arg(long, requires = "end_date")]
    pub(crate) start_date: Option<String>,
    /// Last day of the reporting window (YYYY-MM-DD).
    #[arg(long, requires = "start_date")]
    pub(crate) end_date: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SubmitArgs {
    /// JSON file holding an array of `{name, status, message}` check results.
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Identifier of the reporting sync application.
    #[arg(long, env = ENV_SYNC_APP_ID)]
    pub(crate) app_id: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Summary(_) => "summary",
        Command::Submit(_) => "submit",
    }
}
