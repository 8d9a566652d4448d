//! Configuration loader
//!
//! Reads the console configuration from a YAML file. The two JWT defaults
//! are seeded before decoding, and a decode failure still yields the
//! partially-populated record inside the error.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::{error, info, warn};

use crate::config::types::{Config, DEFAULT_JWT_SECRET_KEY};
use crate::error::ConsoleConfigError;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the console configuration from a YAML file
    ///
    /// The record starts from [`Config::default`], so a file omitting the
    /// JWT keys yields the documented defaults rather than empty values.
    /// Decoding populates every recognized section it can: a section that
    /// fails to decode keeps its seeded value and the call returns
    /// [`ConsoleConfigError::Decode`] carrying both the failure detail and
    /// the partially-populated record. Open failures carry no record.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConsoleConfigError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            error!("no configuration file path supplied");
            return Err(ConsoleConfigError::EmptyPath);
        }

        info!(
            config_path = %path.display(),
            "Loading console configuration"
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            error!(
                config_path = %path.display(),
                error = %e,
                "Failed to read configuration file"
            );
            ConsoleConfigError::Open {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let mut config = Config::default();
        let mut failures = Vec::new();

        match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(sections)) => {
                for (key, value) in sections {
                    let Some(section) = key.as_str() else {
                        continue;
                    };
                    let applied = match section {
                        "logger" => {
                            config.logger = value;
                            Ok(())
                        }
                        "webServer" => overlay(value, &mut config.web_server),
                        "polarisServer" => overlay(value, &mut config.polaris_server),
                        "monitorServer" => overlay(value, &mut config.monitor_server),
                        "oaAuthority" => overlay(value, &mut config.oa_authority),
                        "hrData" => overlay(value, &mut config.hr_data),
                        "zhiYan" => overlay(value, &mut config.zhi_yan),
                        // unknown keys are ignored
                        _ => Ok(()),
                    };
                    if let Err(e) = applied {
                        failures.push(format!("{section}: {e}"));
                    }
                }
            }
            // empty document, defaults only
            Ok(Value::Null) => {}
            Ok(_) => failures.push("configuration root must be a mapping".to_string()),
            Err(e) => failures.push(e.to_string()),
        }

        if config.web_server.jwt.secret_key == DEFAULT_JWT_SECRET_KEY {
            warn!("JWT secret key is the built-in placeholder, override it in production");
        }

        if failures.is_empty() {
            return Ok(config);
        }

        let detail = failures.join("; ");
        warn!(
            config_path = %path.display(),
            error = %detail,
            "Failed to decode configuration file"
        );
        Err(ConsoleConfigError::Decode {
            detail,
            partial: Box::new(config),
        })
    }
}

fn overlay<T: DeserializeOwned>(value: Value, section: &mut T) -> Result<(), serde_yaml::Error> {
    *section = serde_yaml::from_value(value)?;
    Ok(())
}
