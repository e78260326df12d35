//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::{Config, ConfigMerger};
///
/// let low = Config { locale: Some("en".to_string()), ..Default::default() };
/// let high = Config { locale: Some("fr".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.locale, Some("fr".to_string()));
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

    /// Merge source config into target. Every field set in `source`
    /// replaces the one in `target`.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.bundle_dir.is_some() {
            target.bundle_dir.clone_from(&source.bundle_dir);
        }

        if source.locale.is_some() {
            target.locale.clone_from(&source.locale);
        }

        if source.source.is_some() {
            target.source = source.source;
        }

        if source.env_prefix.is_some() {
            target.env_prefix.clone_from(&source.env_prefix);
        }

        if source.registry.is_some() {
            target.registry.clone_from(&source.registry);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
