//! Get command implementation.
//!
//! Resolves one descriptor built from the command line and prints the typed
//! value.

use crate::error::CliError;
use crate::utils::{load_configuration, write_json, GlobalOptions};
use bundlecfg::config::OutputFormat;
use bundlecfg::{PropertyDefinition, PropertyDescriptor, PropertyType, DEFAULT_BUNDLE};
use clap::Args;

/// Resolve a single property.
#[derive(Args)]
pub struct GetCommand {
    /// Key to look up; an empty key resolves straight to the default
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Bundle to search
    #[arg(long, value_name = "BUNDLE", default_value = DEFAULT_BUNDLE)]
    pub bundle: String,

    /// Fail if the key is absent from the bundle
    #[arg(long)]
    pub mandatory: bool,

    /// Value used when the key is absent
    #[arg(long = "default", value_name = "VALUE", default_value = "")]
    pub default_value: String,

    /// Type to produce
    #[arg(long = "type", value_enum, default_value_t = PropertyType::String, ignore_case = true)]
    pub property_type: PropertyType,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self.format.unwrap_or_else(|| config.output_format());

        let definition = PropertyDefinition {
            descriptor: PropertyDescriptor::builder(self.key)
                .bundle(self.bundle)
                .mandatory(self.mandatory)
                .default_value(self.default_value)
                .build(),
            property_type: self.property_type,
        };

        let resolver = config.resolver()?;
        let value = definition.resolve(&resolver)?;

        match format {
            OutputFormat::Plain => {
                if let Some(value) = value {
                    println!("{value}");
                }
            }
            OutputFormat::Json => write_json(&value)?,
        }

        Ok(())
    }
}
