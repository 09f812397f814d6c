//! Top-level save operation: connect once, write in batches.

use log::info;
use sqlx::{Connection, SqliteConnection};

use crate::error_handling::StorageError;

use super::batch::{BatchConfig, BatchWriter, Record};
use super::connect::acquire_connection;

/// Persists `records` into `table`, acquiring a fresh connection for this
/// operation only.
///
/// Returns the number of batches committed. With no records to save, no
/// connection is acquired at all. The connection lives for the duration of
/// this call and is released when it returns; it is not pooled or reused.
pub async fn save_new_data(
    database_url: &str,
    table: &str,
    columns: &[&str],
    records: &[Record],
) -> Result<usize, StorageError> {
    if records.is_empty() {
        info!("no new records for '{table}', skipping save");
        return Ok(0);
    }

    let conn = acquire_connection(|| SqliteConnection::connect(database_url)).await?;
    let mut writer = BatchWriter::new(conn, BatchConfig::default());
    let batches = writer.save(table, columns, records).await?;

    info!(
        "saved {} record(s) into '{table}' across {batches} batch(es)",
        records.len()
    );
    Ok(batches)
}
