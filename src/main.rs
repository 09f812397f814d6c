//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ingest_pipeline` library that
//! handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - The top-level error boundary and the status email
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use ingest_pipeline::collect::GenericCollector;
use ingest_pipeline::config::TARGET_COLUMNS;
use ingest_pipeline::initialization::init_logger_with;
use ingest_pipeline::notify::EmailNotifier;
use ingest_pipeline::{run_pipeline, Opt, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if it exists): current
    // directory first, then next to the executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    let log_path = init_logger_with(
        opt.log_level.clone().into(),
        opt.log_format.clone(),
        &opt.log_dir,
    )
    .context("Failed to initialize logger")?;

    // Setup failures (missing configuration, bad addresses) happen before
    // the run boundary and do propagate.
    let settings = Settings::from_env().context("Failed to load settings")?;
    let notifier =
        EmailNotifier::from_settings(&settings).context("Failed to configure notifier")?;
    let collector = GenericCollector::new(settings.clone());

    match run_pipeline(&settings, &collector, &opt.table, TARGET_COLUMNS).await {
        Ok(report) => {
            let message = format!(
                "Pipeline run completed: {} record(s) collected, {} batch(es) written to '{}' in {:.1}s.",
                report.records_collected, report.batches_written, opt.table, report.elapsed_seconds
            );
            info!("{message}");
            println!("{message}");
            println!("Log written to {}", log_path.display());
            if let Err(e) = notifier.send_report(&message).await {
                // Fire and forget: a lost report is visible in the log only.
                warn!("status email could not be sent: {e}");
            }
        }
        Err(e) => {
            // Collection and save failures are recorded in the daily log
            // and swallowed; the process still exits with status 0.
            error!("pipeline run failed: {:#}", anyhow::Error::from(e));
        }
    }

    Ok(())
}
