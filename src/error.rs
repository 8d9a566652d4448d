//! Error types for console bootstrap
//!
//! Defines the errors raised while loading the console configuration, with
//! clear messages and context for debugging.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;

/// Errors raised while loading the console configuration
#[derive(Error, Debug)]
pub enum ConsoleConfigError {
    /// No configuration file path was supplied
    #[error("configuration file path is empty")]
    EmptyPath,

    /// The configuration file could not be opened or read
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The configuration file could not be fully decoded
    ///
    /// Decoding populates everything it can; the record as populated is
    /// carried here so the caller receives both the error and the record
    /// and decides how to proceed.
    #[error("failed to decode configuration: {detail}")]
    Decode {
        /// Description of every section that failed to decode
        detail: String,
        /// The record as populated around the failure
        partial: Box<Config>,
    },
}
