//! Process initialization.

mod logger;

pub use logger::{daily_log_path, init_logger_with};
