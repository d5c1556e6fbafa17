//! Library exports for crr-cli.
//!
//! The binary and the integration tests share the CLI structure, the
//! command implementations, and the error type through this crate.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
