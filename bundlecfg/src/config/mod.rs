//! Configuration system for bundlecfg.
//!
//! This module decides where property bundles come from and how results are
//! printed. Configuration is layered from several sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BUNDLECFG_*`)
//! 3. Private project config (`bundlecfg.local.yaml`)
//! 4. Project config (`bundlecfg.yaml`)
//! 5. User config (`~/.bundlecfg/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use bundlecfg::config::ConfigBuilder;
//! use bundlecfg::PropertyDescriptor;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let resolver = config.resolver().unwrap();
//! let url = resolver
//!     .resolve_string(&PropertyDescriptor::builder("url").bundle("database").build())
//!     .unwrap();
//! println!("{url:?}");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, SourceKind};
pub use validator::ConfigValidator;
