//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use crr::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { rooms_file: Some(PathBuf::from("low.dat")), ..Default::default() };
/// let high = Config { rooms_file: Some(PathBuf::from("high.dat")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.rooms_file, Some(PathBuf::from("high.dat")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.rooms_file.is_some() {
            target.rooms_file.clone_from(&source.rooms_file);
        }

        if source.schedule_file.is_some() {
            target.schedule_file.clone_from(&source.schedule_file);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
