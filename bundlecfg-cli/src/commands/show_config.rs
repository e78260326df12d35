//! Show the effective configuration after every layer is applied.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show the effective configuration as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let yaml = serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?;
        print!("{yaml}");
        Ok(())
    }
}
