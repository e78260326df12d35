//! Check command implementation.
//!
//! Resolves every entry of a property registry and reports each outcome.
//! The command fails with the exit code of the first failing entry.

use crate::error::CliError;
use crate::utils::{load_configuration, write_json, GlobalOptions};
use bundlecfg::config::OutputFormat;
use bundlecfg::PropertyRegistry;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolve every property in a registry file.
#[derive(Args)]
pub struct CheckCommand {
    /// Registry file (defaults to the configured registry)
    #[arg(value_name = "REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self.format.unwrap_or_else(|| config.output_format());

        let path = self.registry.or_else(|| config.registry.clone()).ok_or_else(|| {
            CliError::InvalidArguments(
                "no registry given and none configured (set `registry` or BUNDLECFG_REGISTRY)"
                    .to_string(),
            )
        })?;

        let registry = PropertyRegistry::load(&path)?;
        let checks = registry.check_all(config.bundle_lookup()?);

        let mut first_failure = None;
        let mut report = BTreeMap::new();

        for check in checks {
            match check.outcome {
                Ok(value) => {
                    if format == OutputFormat::Plain {
                        match &value {
                            Some(v) => println!("{} = {v}", check.name),
                            None => println!("{} (absent)", check.name),
                        }
                    }
                    report.insert(check.name, serde_json::json!({ "value": value }));
                }
                Err(e) => {
                    if format == OutputFormat::Plain {
                        println!("{}: ERROR {e}", check.name);
                    }
                    report.insert(check.name, serde_json::json!({ "error": e.to_string() }));
                    first_failure.get_or_insert(e);
                }
            }
        }

        if format == OutputFormat::Json {
            write_json(&report)?;
        }

        match first_failure {
            Some(e) => Err(CliError::Library(e)),
            None => Ok(()),
        }
    }
}
