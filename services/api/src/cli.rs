use crate::commands::{run_analyze, run_batch, AnalyzeArgs, BatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_profile::config::AppConfig;
use credit_profile::error::AppError;
use credit_profile::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Profile",
    about = "Score applicants and serve synthetic credit profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single applicant from command-line values
    Analyze(AnalyzeArgs),
    /// Score every row of a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = init_runtime()?;

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Analyze(args) => run_analyze(args, &config).await,
        Command::Batch(args) => run_batch(args, &config),
    }
}

/// Load configuration and install tracing once for every command.
pub(crate) fn init_runtime() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}
