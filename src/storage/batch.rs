//! Batched database write operations.
//!
//! Records are persisted to a single table in consecutive batches of at
//! most [`MAX_BATCH_ROWS`] rows, each batch committed before the next one
//! begins. There is no cross-batch transaction: a failure partway through
//! leaves earlier batches durably committed and later batches absent.

use std::future::Future;

use log::debug;
use sqlx::{Connection, QueryBuilder, Sqlite, SqliteConnection};

use crate::config::MAX_BATCH_ROWS;
use crate::error_handling::WriteError;

/// A single column value within a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit integer.
    Integer(i64),
    /// Double-precision float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// One row of data to persist, values ordered to match the target table's
/// column list. Positional correctness is the caller's responsibility; no
/// schema validation happens here.
pub type Record = Vec<Value>;

/// Configuration for batch writing.
pub struct BatchConfig {
    /// Maximum number of rows inserted and committed per batch.
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            batch_size: MAX_BATCH_ROWS,
        }
    }
}

/// Destination that can persist one batch of records as a unit.
///
/// The production implementation is [`SqliteConnection`]; tests substitute
/// a recording store.
pub trait BatchStore {
    /// Inserts `batch` into `table` and commits it. A batch becomes visible
    /// whole or not at all.
    fn insert_batch(
        &mut self,
        table: &str,
        columns: &[&str],
        batch: &[Record],
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

impl BatchStore for SqliteConnection {
    async fn insert_batch(
        &mut self,
        table: &str,
        columns: &[&str],
        batch: &[Record],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.begin().await?;

        // Table and column names come from trusted configuration; all
        // record values are bound parameters.
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("INSERT INTO {} ({}) ", table, columns.join(", ")));
        builder.push_values(batch.iter(), |mut row, record| {
            for value in record {
                match value {
                    Value::Null => row.push_bind(None::<i64>),
                    Value::Integer(v) => row.push_bind(*v),
                    Value::Real(v) => row.push_bind(*v),
                    Value::Text(v) => row.push_bind(v.clone()),
                    Value::Blob(v) => row.push_bind(v.clone()),
                };
            }
        });
        builder.build().execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Writes records to a single table in bounded batches.
pub struct BatchWriter<S> {
    store: S,
    config: BatchConfig,
}

impl<S: BatchStore> BatchWriter<S> {
    /// Creates a writer over `store`.
    pub fn new(store: S, config: BatchConfig) -> Self {
        BatchWriter { store, config }
    }

    /// Persists `records` into `table` in consecutive batches of at most
    /// `batch_size` rows, committing after each batch.
    ///
    /// Returns the number of batches committed; an empty input writes
    /// nothing and returns zero. When the record count divides evenly into
    /// the batch size, no trailing empty batch is issued. On failure the
    /// error names the batch that failed and earlier batches stay
    /// committed.
    pub async fn save(
        &mut self,
        table: &str,
        columns: &[&str],
        records: &[Record],
    ) -> Result<usize, WriteError> {
        if records.is_empty() {
            return Ok(0);
        }

        // chunks() panics on zero
        let batch_size = self.config.batch_size.max(1);

        let mut written = 0;
        for (index, batch) in records.chunks(batch_size).enumerate() {
            self.store
                .insert_batch(table, columns, batch)
                .await
                .map_err(|source| WriteError {
                    table: table.to_string(),
                    batch_index: index,
                    source,
                })?;
            written += 1;
            debug!(
                "committed batch {} ({} rows) into '{}'",
                index,
                batch.len(),
                table
            );
        }
        Ok(written)
    }
}
