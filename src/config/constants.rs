//! Configuration constants.
//!
//! This module defines the operational parameters of the pipeline: batch
//! sizing, the connection retry budget, the target table, and the names of
//! the environment variables read at startup.

use std::time::Duration;

/// Maximum number of rows inserted and committed per batch.
pub const MAX_BATCH_ROWS: usize = 1000;

/// Total connection attempts before giving up on the database.
pub const MAX_CONNECT_ATTEMPTS: usize = 50;

/// A long pause is taken on every N-th failed connection attempt, counting
/// from the very first failure.
pub const PAUSE_EVERY_ATTEMPTS: usize = 10;

/// Length of the pause between clusters of connection attempts.
pub const CONNECT_PAUSE: Duration = Duration::from_secs(15 * 60);

/// Table that records produced by this pipeline are inserted into.
pub const TARGET_TABLE: &str = "events";

/// Column names of the target table, in the exact order values appear in
/// each record.
pub const TARGET_COLUMNS: &[&str] = &["source_id", "payload", "collected_at"];

/// Environment variable holding the database connection URI.
pub const ENV_DATABASE_URL: &str = "SQL_URI";

/// Environment variable holding the primary report recipient.
pub const ENV_TO_ADDRESS: &str = "TO_ADDRESS";

/// Environment variable holding the comma-separated CC list (optional).
pub const ENV_CC_ADDRESSES: &str = "CC_ADDRESS";

/// Environment variable holding the sender mailbox for status reports.
pub const ENV_FROM_ADDRESS: &str = "FROM_ADDRESS";

/// Environment variable holding the SMTP relay host.
pub const ENV_SMTP_RELAY: &str = "SMTP_RELAY";
