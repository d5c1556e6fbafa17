//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use crr::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a path is empty, contains a NUL byte,
    /// or if both files resolve to the same path.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref path) = config.rooms_file {
            Self::validate_path("rooms_file", path)?;
        }
        if let Some(ref path) = config.schedule_file {
            Self::validate_path("schedule_file", path)?;
        }

        if config.rooms_file() == config.schedule_file() {
            return Err(Error::Validation {
                field: "schedule_file".into(),
                message: format!(
                    "must differ from rooms_file ({})",
                    config.rooms_file().display()
                ),
            });
        }

        Ok(())
    }

    fn validate_path(field: &str, path: &Path) -> Result<()> {
        let text = path.to_string_lossy();
        if text.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot be empty".into(),
            });
        }
        if text.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot contain null bytes".into(),
            });
        }
        Ok(())
    }
}
