//! Database operations: connection acquisition and batched writes.

mod batch;
mod connect;
mod save;

pub use batch::{BatchConfig, BatchStore, BatchWriter, Record, Value};
pub use connect::{acquire_connection, connect_retry_schedule};
pub use save::save_new_data;
