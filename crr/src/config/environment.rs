//! Environment variable handling for configuration overrides.
//!
//! Supported variables:
//!
//! | variable             | field           |
//! |----------------------|-----------------|
//! | `CRR_ROOMS_FILE`     | `rooms_file`    |
//! | `CRR_SCHEDULE_FILE`  | `schedule_file` |
//! | `CRR_OUTPUT_FORMAT`  | `output_format` |
//!
//! Empty values are treated as unset.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the room registry path.
pub const ROOMS_FILE_ENV: &str = "CRR_ROOMS_FILE";

/// Environment variable overriding the reservation file path.
pub const SCHEDULE_FILE_ENV: &str = "CRR_SCHEDULE_FILE";

/// Environment variable overriding the listing format.
pub const OUTPUT_FORMAT_ENV: &str = "CRR_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crr::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `CRR_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::var(ROOMS_FILE_ENV) {
            config.rooms_file = Some(PathBuf::from(path));
        }

        if let Some(path) = Self::var(SCHEDULE_FILE_ENV) {
            config.schedule_file = Some(PathBuf::from(path));
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_format(&format)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn parse_format(s: &str) -> Result<OutputFormat> {
        s.parse().map_err(|message| Error::Validation {
            field: OUTPUT_FORMAT_ENV.into(),
            message,
        })
    }
}
