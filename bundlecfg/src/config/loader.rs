//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading bundlecfg configuration files
//! from the user directory and from project directories.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the user configuration directory under the home directory.
pub const USER_DIR_NAME: &str = ".bundlecfg";

/// Project configuration file name.
pub const PROJECT_FILE: &str = "bundlecfg.yaml";

/// Private (uncommitted) project configuration file name.
pub const LOCAL_PROJECT_FILE: &str = "bundlecfg.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration, with relative paths anchored at the file's
    /// directory.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use bundlecfg::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.bundlecfg/config.yaml` (precedence 1)
    /// 2. `bundlecfg.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `bundlecfg.local.yaml` next to it (precedence 3)
    ///
    /// `user_dir` overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("Home directory unknown, skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        Ok(Some(Self::load_source(config_path, 1)?))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either project file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_FILE, 2), (LOCAL_PROJECT_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    configs.push(Self::load_source(path, precedence)?);
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    fn load_source(path: PathBuf, precedence: u8) -> Result<ConfigSource> {
        let mut config = Self::load_file(&path)?;
        if let Some(parent) = path.parent() {
            config.anchor_paths(parent);
        }
        log::debug!("Loaded configuration from {}", path.display());
        Ok(ConfigSource {
            path,
            precedence,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// Relative paths in the file are left as written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Returns `~/.bundlecfg/config.yaml`, if the home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_DIR_NAME).join("config.yaml"))
    }
}
