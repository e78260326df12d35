//! Configuration validation.

use crate::bundle::Locale;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { env_prefix: Some("1APP".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref dir) = config.bundle_dir {
            Self::validate_path("bundle_dir", dir)?;
        }

        if let Some(ref locale) = config.locale {
            Locale::parse(locale).map_err(|_| Error::Validation {
                field: "locale".into(),
                message: format!("Invalid locale tag '{locale}'"),
            })?;
        }

        if let Some(ref prefix) = config.env_prefix {
            Self::validate_env_prefix(prefix)?;
        }

        if let Some(ref registry) = config.registry {
            Self::validate_path("registry", registry)?;
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

    /// An empty prefix is allowed and selects unprefixed variable names.
    fn validate_env_prefix(prefix: &str) -> Result<()> {
        let Some(first) = prefix.chars().next() else {
            return Ok(());
        };

        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Validation {
                field: "env_prefix".into(),
                message: "Must contain only ASCII letters, digits and underscores".into(),
            });
        }

        if !first.is_ascii_alphabetic() {
            return Err(Error::Validation {
                field: "env_prefix".into(),
                message: "Must start with a letter".into(),
            });
        }

        Ok(())
    }
}
