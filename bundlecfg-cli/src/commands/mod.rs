//! CLI command implementations.
//!
//! - `get`: Resolve a single property
//! - `check`: Resolve every property in a registry file
//! - `list`: List the entries of a bundle
//! - `validate`: Validate a configuration file
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod get;
pub mod list;
pub mod show_config;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
