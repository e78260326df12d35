//! Property-based tests for configuration layering.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, SourceKind};
use proptest::prelude::*;
use std::path::PathBuf;

fn source_strategy() -> impl Strategy<Value = SourceKind> {
    prop_oneof![Just(SourceKind::Directory), Just(SourceKind::Environment)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Plain), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,10}"),
        prop::option::of("[a-z]{2}(_[A-Z]{2})?"),
        prop::option::of(source_strategy()),
        prop::option::of("[A-Z]{1,8}"),
        prop::option::of("[a-z]{1,10}\\.yaml"),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(bundle_dir, locale, source, env_prefix, registry, output_format)| Config {
                bundle_dir: bundle_dir.map(PathBuf::from),
                locale,
                source,
                env_prefix,
                registry: registry.map(PathBuf::from),
                output_format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Each field of the merge result comes from the higher layer when set there.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.bundle_dir, high.bundle_dir.or(low.bundle_dir));
        prop_assert_eq!(merged.locale, high.locale.or(low.locale));
        prop_assert_eq!(merged.source, high.source.or(low.source));
        prop_assert_eq!(merged.env_prefix, high.env_prefix.or(low.env_prefix));
        prop_assert_eq!(merged.registry, high.registry.or(low.registry));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a configuration into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // An empty overlay leaves the target unchanged.
    #[test]
    fn config_merge_empty_overlay(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Serialized configurations read back unchanged.
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
