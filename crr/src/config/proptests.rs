//! Property-based tests for configuration system.

use super::loader::ConfigSource;
use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use proptest::prelude::*;
use std::path::PathBuf;

fn path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z]{1,8}", 1..4).prop_map(|parts| {
        let mut path = PathBuf::from("/srv");
        for part in parts {
            path.push(part);
        }
        path.set_extension("dat");
        path
    })
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(path_strategy()),
        prop::option::of(path_strategy()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(rooms_file, schedule_file, output_format)| Config {
            rooms_file,
            schedule_file,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Each field takes the value of the highest-precedence source setting it
    #[test]
    fn config_merge_last_set_wins(configs in prop::collection::vec(config_strategy(), 0..6)) {
        let sources: Vec<ConfigSource> = configs
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, config)| ConfigSource {
                path: PathBuf::from(format!("{i}.yaml")),
                precedence: u8::try_from(i).unwrap(),
                config,
            })
            .collect();

        let merged = ConfigMerger::merge(sources);

        let expected_rooms = configs.iter().rev().find_map(|c| c.rooms_file.clone());
        let expected_schedule = configs.iter().rev().find_map(|c| c.schedule_file.clone());
        let expected_format = configs.iter().rev().find_map(|c| c.output_format);
        prop_assert_eq!(merged.rooms_file, expected_rooms);
        prop_assert_eq!(merged.schedule_file, expected_schedule);
        prop_assert_eq!(merged.output_format, expected_format);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Serialized configs parse back to the same value
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
