//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `BUNDLECFG_*` environment variables that
//! override configuration file values. These are distinct from the variables
//! read by the environment bundle backend, which hold property values.

use crate::config::schema::{Config, OutputFormat, SourceKind};
use crate::error::{Error, Result};
use clap::ValueEnum;
use std::env;
use std::path::PathBuf;

/// Overrides the bundle directory.
pub const BUNDLE_DIR_ENV: &str = "BUNDLECFG_BUNDLE_DIR";
/// Overrides the locale.
pub const LOCALE_ENV: &str = "BUNDLECFG_LOCALE";
/// Overrides the bundle source (`directory` or `environment`).
pub const SOURCE_ENV: &str = "BUNDLECFG_SOURCE";
/// Overrides the environment backend's variable prefix.
pub const ENV_PREFIX_ENV: &str = "BUNDLECFG_ENV_PREFIX";
/// Overrides the default registry file.
pub const REGISTRY_ENV: &str = "BUNDLECFG_REGISTRY";
/// Overrides the output format (`plain` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "BUNDLECFG_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use bundlecfg::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the variable if the source or
    /// output format is not recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::var(BUNDLE_DIR_ENV) {
            config.bundle_dir = Some(PathBuf::from(dir));
        }

        if let Some(locale) = Self::var(LOCALE_ENV) {
            config.locale = Some(locale);
        }

        if let Some(source) = Self::var(SOURCE_ENV) {
            config.source = Some(Self::parse_enum::<SourceKind>(SOURCE_ENV, &source)?);
        }

        if let Some(prefix) = Self::var(ENV_PREFIX_ENV) {
            config.env_prefix = Some(prefix);
        }

        if let Some(registry) = Self::var(REGISTRY_ENV) {
            config.registry = Some(PathBuf::from(registry));
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_enum::<OutputFormat>(OUTPUT_FORMAT_ENV, &format)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn parse_enum<T: ValueEnum>(field: &str, s: &str) -> Result<T> {
        T::from_str(s.trim(), true).map_err(|_| {
            let expected: Vec<String> = T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect();
            Error::Validation {
                field: field.into(),
                message: format!("Invalid value '{s}' (expected {})", expected.join("/")),
            }
        })
    }
}
