//! Error types for the pipeline.
//!
//! Every fallible operation returns a typed `Result` so callers at any
//! layer can inspect the failure and decide to retry, escalate, or ignore.
//! The binary catches [`PipelineError`] once at the run boundary, logs it,
//! and exits normally; nothing in the library relies on unwinding.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error installing the global logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error creating the log directory or opening the daily log file.
    #[error("Log file error: {0}")]
    LogFileError(#[from] std::io::Error),
}

/// Raised when the connection retry budget is exhausted.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// No attempt succeeded within the budget.
    #[error("unable to establish connection after {attempts} attempts: {source}")]
    Exhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
        /// Driver error from the final attempt.
        source: sqlx::Error,
    },
}

/// Raised when a batch insert or commit fails after a connection was
/// successfully established.
///
/// Batches committed before `batch_index` remain durable; this error is not
/// retried.
#[derive(Error, Debug)]
#[error("batch insert into '{table}' failed at batch {batch_index}: {source}")]
pub struct WriteError {
    /// Table the save operation was writing to.
    pub table: String,
    /// Zero-based index of the batch that failed.
    pub batch_index: usize,
    /// Underlying driver error.
    pub source: sqlx::Error,
}

/// Failure in the source-specific collection step.
#[derive(Error, Debug)]
#[error("data collection failed: {0}")]
pub struct CollectionError(#[from] pub anyhow::Error);

/// Error types for composing or sending the status email.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A configured mailbox address could not be parsed.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The report message could not be built.
    #[error("could not compose status email: {0}")]
    Compose(#[from] lettre::error::Error),

    /// The SMTP relay rejected or failed the send.
    #[error("could not send status email: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Error for a complete save operation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Connection acquisition failed after exhausting the retry budget.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// A batch insert failed; earlier batches stay committed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Top-level pipeline error, caught only at the run boundary.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The collection step failed.
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// The save operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
