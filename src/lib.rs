//! ingest_pipeline library: skeleton for a periodic data-ingestion job.
//!
//! The pipeline is a linear script: load configuration, collect records
//! from a source-specific [`collect::Collector`], persist them to a SQL
//! table in bounded batches behind a retrying connector, and report the
//! outcome. The storage core (connection retry and batched commits) is
//! real; collection is a template seam to fill in per data source.
//!
//! # Example
//!
//! ```no_run
//! use ingest_pipeline::collect::GenericCollector;
//! use ingest_pipeline::config::{TARGET_COLUMNS, TARGET_TABLE};
//! use ingest_pipeline::{run_pipeline, Settings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let collector = GenericCollector::new(settings.clone());
//! let report = run_pipeline(&settings, &collector, TARGET_TABLE, TARGET_COLUMNS).await?;
//! println!(
//!     "collected {} record(s), wrote {} batch(es)",
//!     report.records_collected, report.batches_written
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod collect;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod notify;
pub mod storage;

// Re-export public API
pub use config::{Opt, Settings};
pub use run::{run_pipeline, RunReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use log::info;

    use crate::collect::Collector;
    use crate::config::Settings;
    use crate::error_handling::PipelineError;
    use crate::storage::save_new_data;

    /// Results of a completed pipeline run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of records produced by the collector.
        pub records_collected: usize,
        /// Number of batches committed to the database.
        pub batches_written: usize,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs one collect-and-save cycle.
    ///
    /// Collects records from `collector` and persists them into `table`,
    /// whose columns must match each record's value order. The status
    /// notification is the caller's concern; this function only reports
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when collection or the save operation
    /// fails. A save failure can leave earlier batches committed; see
    /// [`crate::error_handling::WriteError`].
    pub async fn run_pipeline<C: Collector>(
        settings: &Settings,
        collector: &C,
        table: &str,
        columns: &[&str],
    ) -> Result<RunReport, PipelineError> {
        let started = std::time::Instant::now();

        let records = collector.collect().await?;
        info!("collected {} record(s) for table '{table}'", records.len());

        let batches_written =
            save_new_data(&settings.database_url, table, columns, &records).await?;

        let report = RunReport {
            records_collected: records.len(),
            batches_written,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        info!(
            "pipeline run complete: {} record(s) in {} batch(es) ({:.1}s)",
            report.records_collected, report.batches_written, report.elapsed_seconds
        );
        Ok(report)
    }
}
