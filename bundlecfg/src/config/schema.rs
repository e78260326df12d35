//! Configuration schema definitions.
//!
//! This module defines the settings that tell bundlecfg where bundles live
//! and how results are printed. It is distinct from the bundles themselves,
//! which hold the properties being resolved.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::{BundleLookup, DirectoryBundles, EnvironmentBundles, Locale};
use crate::error::Result;
use crate::resolver::PropertyResolver;

/// Bundle directory used when none is configured.
pub const DEFAULT_BUNDLE_DIR: &str = ".";

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; see
/// [`crate::config::ConfigBuilder`] for how sources are combined.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::{Config, SourceKind};
/// use std::path::PathBuf;
///
/// let config = Config {
///     bundle_dir: Some(PathBuf::from("/etc/myapp")),
///     locale: Some("fr_FR".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.source_kind(), SourceKind::Directory);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding bundle files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_dir: Option<PathBuf>,

    /// Locale used to select locale-specific bundle files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Which backend bundles are read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceKind>,

    /// Variable prefix for the environment backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_prefix: Option<String>,

    /// Default property registry file for `check`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<PathBuf>,

    /// Output format for resolved values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns a configuration holding the built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            bundle_dir: Some(PathBuf::from(DEFAULT_BUNDLE_DIR)),
            locale: None,
            source: Some(SourceKind::Directory),
            env_prefix: None,
            registry: None,
            output_format: Some(OutputFormat::Plain),
        }
    }

    /// Returns the configured source, defaulting to the directory backend.
    #[must_use]
    pub fn source_kind(&self) -> SourceKind {
        self.source.unwrap_or_default()
    }

    /// Returns the configured bundle directory, defaulting to `.`.
    #[must_use]
    pub fn bundle_dir(&self) -> &Path {
        self.bundle_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_BUNDLE_DIR))
    }

    /// Returns the configured output format, defaulting to plain text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Parses the configured locale, if any.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the locale tag is invalid.
    pub fn parsed_locale(&self) -> Result<Option<Locale>> {
        self.locale.as_deref().map(Locale::parse).transpose()
    }

    /// Resolves relative paths against `base`.
    ///
    /// Paths in a configuration file are relative to the file's directory.
    pub fn anchor_paths(&mut self, base: &Path) {
        if let Some(dir) = &self.bundle_dir {
            if dir.is_relative() {
                self.bundle_dir = Some(base.join(dir));
            }
        }
        if let Some(registry) = &self.registry {
            if registry.is_relative() {
                self.registry = Some(base.join(registry));
            }
        }
    }

    /// Builds the bundle lookup this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the locale tag is invalid.
    pub fn bundle_lookup(&self) -> Result<Box<dyn BundleLookup>> {
        Ok(match self.source_kind() {
            SourceKind::Directory => Box::new(self.directory_bundles()?),
            SourceKind::Environment => Box::new(EnvironmentBundles::new(
                self.env_prefix.clone().unwrap_or_default(),
            )),
        })
    }

    /// Builds the directory backend for this configuration, whatever the
    /// configured source.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the locale tag is invalid.
    pub fn directory_bundles(&self) -> Result<DirectoryBundles> {
        let mut bundles = DirectoryBundles::new(self.bundle_dir());
        if let Some(locale) = self.parsed_locale()? {
            bundles = bundles.with_locale(locale);
        }
        Ok(bundles)
    }

    /// Builds a resolver over [`Config::bundle_lookup`].
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the locale tag is invalid.
    pub fn resolver(&self) -> Result<PropertyResolver<Box<dyn BundleLookup>>> {
        Ok(PropertyResolver::new(self.bundle_lookup()?))
    }
}

/// Backend that bundles are read from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum SourceKind {
    /// Property and YAML files in a directory.
    #[default]
    Directory,
    /// Process environment variables.
    Environment,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// Output format for resolved values.
///
/// # Examples
///
/// ```
/// use bundlecfg::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare values, one per line.
    #[default]
    Plain,
    /// JSON output.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
