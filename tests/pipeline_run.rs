//! Integration tests for the full collect-and-save pipeline run.

mod helpers;

use helpers::{count_rows, create_events_db, make_records};
use tempfile::TempDir;

use ingest_pipeline::collect::Collector;
use ingest_pipeline::config::{TARGET_COLUMNS, TARGET_TABLE};
use ingest_pipeline::error_handling::{CollectionError, PipelineError};
use ingest_pipeline::storage::Record;
use ingest_pipeline::{run_pipeline, Settings};

/// Collector that yields a fixed set of records.
struct FixedCollector {
    records: Vec<Record>,
}

impl Collector for FixedCollector {
    async fn collect(&self) -> Result<Vec<Record>, CollectionError> {
        Ok(self.records.clone())
    }
}

/// Collector whose source is unavailable.
struct FailingCollector;

impl Collector for FailingCollector {
    async fn collect(&self) -> Result<Vec<Record>, CollectionError> {
        Err(anyhow::anyhow!("source unavailable").into())
    }
}

fn test_settings(database_url: String) -> Settings {
    Settings {
        database_url,
        to_address: "ops@example.com".to_string(),
        cc_addresses: vec![],
        from_address: "pipeline@example.com".to_string(),
        smtp_relay: "localhost".to_string(),
    }
}

#[tokio::test]
async fn test_run_reports_collected_and_written() {
    let dir = TempDir::new().expect("temp dir");
    let url = create_events_db(&dir.path().join("test.db")).await;
    let settings = test_settings(url.clone());
    let collector = FixedCollector {
        records: make_records(1001),
    };

    let report = run_pipeline(&settings, &collector, TARGET_TABLE, TARGET_COLUMNS)
        .await
        .expect("run succeeds");

    assert_eq!(report.records_collected, 1001);
    assert_eq!(report.batches_written, 2);
    assert_eq!(count_rows(&url, TARGET_TABLE).await, 1001);
}

#[tokio::test(start_paused = true)]
async fn test_run_with_no_records_touches_nothing() {
    // Unusable URI: reaching the database at all would exhaust the retry
    // budget and fail the run.
    let settings = test_settings("sqlite:/nonexistent/dir/pipeline.db".to_string());
    let collector = FixedCollector { records: vec![] };

    let report = run_pipeline(&settings, &collector, TARGET_TABLE, TARGET_COLUMNS)
        .await
        .expect("empty run succeeds");

    assert_eq!(report.records_collected, 0);
    assert_eq!(report.batches_written, 0);
}

#[tokio::test]
async fn test_collection_failure_propagates() {
    let dir = TempDir::new().expect("temp dir");
    let url = create_events_db(&dir.path().join("test.db")).await;
    let settings = test_settings(url.clone());

    let err = run_pipeline(&settings, &FailingCollector, TARGET_TABLE, TARGET_COLUMNS)
        .await
        .expect_err("collection fails");

    assert!(matches!(err, PipelineError::Collection(_)));
    // Nothing was written.
    assert_eq!(count_rows(&url, TARGET_TABLE).await, 0);
}
