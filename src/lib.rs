//! Polaris Console Bootstrap
//!
//! Loads the YAML configuration of a console service front-ending a
//! service-mesh control plane: web server bind options, downstream service
//! URLs, JWT session options and the optional HR-directory, authority and
//! observability integrations.
//!
//! The record is loaded once, early in startup, and handed read-only to the
//! rest of the process. Decoding seeds the documented JWT defaults first, and
//! a decode failure still carries the partially-populated record so the
//! caller decides whether to abort.
//!
//! # Example
//!
//! ```no_run
//! use polaris_console_bootstrap::ConfigLoader;
//!
//! # fn main() -> Result<(), polaris_console_bootstrap::ConsoleConfigError> {
//! let config = ConfigLoader::load("polaris-console.yaml")?;
//! println!("control plane at {}", config.polaris_server.address);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

// Re-export public API
pub use config::{
    Config, ConfigLoader, HrDataConfig, JwtConfig, MonitorServerConfig, OaAuthorityConfig,
    PolarisServerConfig, StaffDepartment, WebServerConfig, ZhiYanConfig,
};
pub use error::ConsoleConfigError;

// Initialize tracing subscriber for structured logging
use tracing_subscriber::EnvFilter;

/// Initialize structured logging
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}
