//! Application configuration.
//!
//! This module provides:
//! - Operational constants (batch size, retry budget, target table)
//! - CLI option types and parsing
//! - Environment-backed runtime settings

mod constants;
mod types;

pub use constants::*;
pub use types::{split_addresses, LogFormat, LogLevel, Opt, Settings};
