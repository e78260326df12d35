//! Utility functions for CLI operations.
//!
//! Configuration loading and output helpers shared across commands.

use crate::error::CliError;
use bundlecfg::config::SourceKind;
use bundlecfg::{Config, ConfigBuilder};
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the bundle directory.
    pub bundle_dir: Option<PathBuf>,

    /// Override the locale.
    pub locale: Option<String>,

    /// Override the bundle source.
    pub source: Option<SourceKind>,

    /// Override the environment backend's variable prefix.
    pub env_prefix: Option<String>,
}

impl GlobalOptions {
    /// Global flags as a configuration layer.
    pub fn as_config(&self) -> Config {
        Config {
            bundle_dir: self.bundle_dir.clone(),
            locale: self.locale.clone(),
            source: self.source,
            env_prefix: self.env_prefix.clone(),
            ..Config::default()
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_config(global.as_config())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
