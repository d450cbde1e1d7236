use crate::commands::{run_assess, run_dashboard, run_record, AssessArgs, DashboardArgs, RecordArgs};
use crate::infra::open_service;
use clap::{Parser, Subcommand};
use rural_triage::config::{AppConfig, StorageConfig};
use rural_triage::error::AppError;
use rural_triage::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "triage",
    about = "Score patient risk and track visits for follow-up from the command line",
    version
)]
struct Cli {
    /// Override the configured visit document (TRIAGE_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a patient without recording a visit
    Assess(AssessArgs),
    /// Validate, score, and record a patient visit
    Record(RecordArgs),
    /// Summarize recorded visits, highest risk first
    Dashboard(DashboardArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(path) = cli.data_file {
        config.storage = StorageConfig::new(path)?;
    }

    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let service = open_service(&config.storage);

    match cli.command {
        Command::Assess(args) => run_assess(&service, args),
        Command::Record(args) => run_record(&service, args),
        Command::Dashboard(args) => run_dashboard(&service, args),
    }
}
