//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, GetCommand, ListCommand, ShowConfigCommand, ValidateCommand,
};
use bundlecfg::config::SourceKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving configuration properties from bundles.
#[derive(Parser)]
#[command(name = "bundlecfg")]
#[command(version, about = "Resolve typed configuration properties from named bundles", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding bundle files
    #[arg(long, value_name = "PATH", global = true, env = "BUNDLECFG_BUNDLE_DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Locale used to pick locale-specific bundle files (e.g. fr_FR)
    #[arg(long, value_name = "TAG", global = true, env = "BUNDLECFG_LOCALE")]
    pub locale: Option<String>,

    /// Where bundles are read from
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub source: Option<SourceKind>,

    /// Variable prefix for the environment source
    #[arg(long, value_name = "PREFIX", global = true)]
    pub env_prefix: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a single property
    Get(GetCommand),

    /// Resolve every property in a registry file
    Check(CheckCommand),

    /// List the entries of a bundle
    List(ListCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bundlecfg",
            "get",
            "--key",
            "url",
            "--bundle",
            "database",
            "--source",
            "Environment",
        ])
        .unwrap();
        assert_eq!(cli.source, Some(SourceKind::Environment));
        assert!(matches!(cli.command, Command::Get(_)));
    }
}
