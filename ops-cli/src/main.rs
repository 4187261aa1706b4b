use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use claimgen::{export_dataset, DatasetOrchestrator};
use config_engine::{ConfigLoader, ENV_PREFIX};
use error_common::{log_error, SynthError};
use logger_redacted::{init_logging, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "claimgen")]
#[command(about = "Generate a reproducible synthetic healthcare claims dataset")]
struct Args {
    /// Configuration file (TOML or YAML)
    #[arg(short, long, env = "CLAIMGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Number of patients
    #[arg(long)]
    patients: Option<usize>,

    /// Number of providers
    #[arg(long)]
    providers: Option<usize>,

    /// Claims generated for each patient
    #[arg(long)]
    claims_per_patient: Option<usize>,

    /// Notes generated for each claim
    #[arg(long)]
    notes_per_claim: Option<usize>,

    /// Run seed
    #[arg(long)]
    seed: Option<u64>,

    /// Date every sampling window ends at (YYYY-MM-DD); defaults to today
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Export directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Generate claims on the rayon pool with per-patient derived seeds
    #[arg(long)]
    parallel: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON log lines
    #[arg(long)]
    json_logs: bool,

    /// Generate only, skip writing files
    #[arg(long)]
    no_export: bool,
}

/// Flags that override file and environment values; unset flags are skipped
#[derive(Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patients: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    providers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    claims_per_patient: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes_per_claim: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parallel: Option<bool>,
}

impl From<&Args> for Overrides {
    fn from(args: &Args) -> Self {
        Self {
            seed: args.seed,
            patients: args.patients,
            providers: args.providers,
            claims_per_patient: args.claims_per_patient,
            notes_per_claim: args.notes_per_claim,
            reference_date: args.reference_date,
            output_dir: args.output_dir.clone(),
            parallel: args.parallel.then_some(true),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader
            .with_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?;
    }
    let mut config = loader
        .with_env(ENV_PREFIX)
        .with_overrides(&Overrides::from(&args))
        .load()
        .map_err(SynthError::from)
        .context("invalid generation parameters")?;

    if args.verbose {
        config.logging.level = "debug".to_string();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }
    init_logging(&config.logging).context("initializing logging")?;

    let orchestrator = DatasetOrchestrator::new(config)?;
    let (dataset, metadata) = match orchestrator.run() {
        Ok(run) => run,
        Err(e) => {
            log_error("generate", &e);
            return Err(e.into());
        }
    };

    if args.no_export {
        info!("Export skipped");
        return Ok(());
    }

    let output_dir = &orchestrator.config().output_dir;
    match export_dataset(output_dir, &dataset, &metadata) {
        Ok(files) => {
            for file in &files {
                info!(path = %file.display(), "Exported");
            }
            Ok(())
        }
        Err(e) => {
            log_error("export", &e);
            Err(e.into())
        }
    }
}
