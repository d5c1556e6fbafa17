//! Configuration system for crr.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `crr.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CRR_*`)
//! 3. Project config (the nearest `crr.yaml` at or above the working directory)
//! 4. User config (`~/.crr/config.yaml`)
//! 5. Built-in defaults (`rooms.dat` and `schedule.dat`)
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use crr::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("Reservations live in {}", config.schedule_file().display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
