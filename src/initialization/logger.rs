//! Logger initialization.
//!
//! The pipeline writes diagnostics to one append-only text file per
//! calendar day, named `log_MMDDYY.txt` under the configured log directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Path of today's log file under `log_dir`.
pub fn daily_log_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("log_{}.txt", Local::now().format("%m%d%y")))
}

/// Initializes the logger with the specified level and format, writing to
/// today's log file under `log_dir`.
///
/// The logger reads from the `RUST_LOG` environment variable by default,
/// but the provided `level` parameter will override it. Noisy dependency
/// modules are filtered down so the daily file stays readable.
///
/// Returns the path of the log file on success.
///
/// # Errors
///
/// Returns `InitializationError` if the log directory or file cannot be
/// created, or if a global logger was already installed.
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    log_dir: &Path,
) -> Result<PathBuf, InitializationError> {
    std::fs::create_dir_all(log_dir)?;
    let path = daily_log_path(log_dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // Read from RUST_LOG first, then override with the configured level
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("sqlx", LevelFilter::Info);
    builder.filter_module("lettre", LevelFilter::Info);
    builder.filter_module("ingest_pipeline", level);
    builder.target(env_logger::Target::Pipe(Box::new(file)));

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {} {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
        }
    }

    // try_init() instead of init(): tests may initialize more than once
    builder.try_init()?;

    log::info!("logging initialized, writing to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_log_path_uses_date_stamp() {
        let path = daily_log_path(Path::new("logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(name.len(), "log_MMDDYY.txt".len());
    }

    #[test]
    fn test_init_logger_creates_log_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain, dir.path());
        match result {
            Ok(path) => assert!(path.exists()),
            // Another test may have installed the global logger first.
            Err(InitializationError::LoggerError(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_init_logger_json_format() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let result = init_logger_with(LevelFilter::Info, LogFormat::Json, dir.path());
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
