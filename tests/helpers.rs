// Shared test helpers for database setup and test record construction.

use std::path::Path;

use sqlx::{Connection, SqliteConnection};

use ingest_pipeline::storage::{Record, Value};

/// Creates an empty SQLite database file at `db_path` with the pipeline's
/// target table, and returns its connection URL.
#[allow(dead_code)] // Used by other test files
pub async fn create_events_db(db_path: &Path) -> String {
    create_db_with_schema(
        db_path,
        "CREATE TABLE IF NOT EXISTS events (
            source_id INTEGER NOT NULL,
            payload TEXT NOT NULL,
            collected_at INTEGER NOT NULL
        )",
    )
    .await
}

/// Creates an empty SQLite database file at `db_path` and applies `schema`,
/// returning its connection URL.
#[allow(dead_code)] // Used by other test files
pub async fn create_db_with_schema(db_path: &Path, schema: &str) -> String {
    // SQLite requires the file to exist or be created first.
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .read(true)
        .open(db_path)
        .expect("Failed to create database file");

    let url = format!("sqlite:{}", db_path.display());
    let mut conn = SqliteConnection::connect(&url)
        .await
        .expect("Failed to connect to test database");
    sqlx::query(schema)
        .execute(&mut conn)
        .await
        .expect("Failed to create table");
    url
}

/// Builds `n` records shaped for the `events` table: sequential source ids,
/// per-row payload text, and a fixed-base timestamp.
#[allow(dead_code)] // Used by other test files
pub fn make_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            vec![
                Value::Integer(i as i64),
                Value::Text(format!("payload-{i}")),
                Value::Integer(1_700_000_000 + i as i64),
            ]
        })
        .collect()
}

/// Counts the rows currently in `table`.
#[allow(dead_code)] // Used by other test files
pub async fn count_rows(url: &str, table: &str) -> i64 {
    let mut conn = SqliteConnection::connect(url)
        .await
        .expect("Failed to connect to test database");
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&mut conn)
        .await
        .expect("Failed to count rows")
}
