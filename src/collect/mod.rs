//! Data collection.
//!
//! Collection is source specific; the pipeline only requires a
//! [`Collector`] that yields records positionally consistent with the
//! target table's column list. [`GenericCollector`] is the template
//! implementation to flesh out per data source.

use std::future::Future;

use crate::config::Settings;
use crate::error_handling::CollectionError;
use crate::storage::Record;

/// Source of records for one pipeline run.
pub trait Collector {
    /// Produces the records to persist for this run, cleaned and ordered to
    /// match the target table's columns.
    fn collect(&self) -> impl Future<Output = Result<Vec<Record>, CollectionError>> + Send;
}

/// Placeholder collector for a new pipeline.
///
/// `fetch_raw` is where source-specific gathering goes (API pulls, FTP
/// drops, export files); [`Collector::collect`] is where the raw payload is
/// cleaned and reshaped into records.
pub struct GenericCollector {
    /// Startup settings; source credentials and endpoints belong here, not
    /// inline.
    pub settings: Settings,
}

impl GenericCollector {
    /// Creates a collector over the process settings.
    pub fn new(settings: Settings) -> Self {
        GenericCollector { settings }
    }

    /// Gathers raw data from the configured source.
    async fn fetch_raw(&self) -> Result<Vec<Record>, CollectionError> {
        // Source-specific collection goes here.
        Ok(Vec::new())
    }
}

impl Collector for GenericCollector {
    async fn collect(&self) -> Result<Vec<Record>, CollectionError> {
        let raw = self.fetch_raw().await?;
        // Per-row cleaning goes here; each record's values must line up
        // with the target table's column list.
        Ok(raw)
    }
}
