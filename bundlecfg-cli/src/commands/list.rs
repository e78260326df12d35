//! List command implementation.
//!
//! Displays the entries of one directory bundle, merged across its locale
//! chain, in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{load_configuration, write_json, GlobalOptions};
use bundlecfg::bundle::Properties;
use bundlecfg::config::SourceKind;
use bundlecfg::DEFAULT_BUNDLE;
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 2] = ["key", "value"];

/// List the entries of a bundle.
#[derive(Args)]
pub struct ListCommand {
    /// Bundle to list
    #[arg(long, value_name = "BUNDLE", default_value = DEFAULT_BUNDLE)]
    pub bundle: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: ListFormat,

    /// Also print the files the bundle was read from (to stderr)
    #[arg(long)]
    pub show_files: bool,
}

/// Output format for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON object
    Json,
    /// CSV format
    Csv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        if config.source_kind() != SourceKind::Directory {
            return Err(CliError::InvalidArguments(format!(
                "list requires the directory source (configured source is {})",
                config.source_kind()
            )));
        }

        let bundles = config.directory_bundles()?;

        if self.show_files {
            for file in bundles.bundle_files(&self.bundle)? {
                eprintln!("{}", file.display());
            }
        }

        let entries = bundles.bundle_entries(&self.bundle)?;

        match self.format {
            ListFormat::Table => format_as_table(&entries)?,
            ListFormat::Json => {
                let map: BTreeMap<&str, &str> = entries.iter().collect();
                write_json(&map)?;
            }
            ListFormat::Csv => format_as_csv(&entries)?,
        }

        Ok(())
    }
}

fn format_as_table(entries: &Properties) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for (key, value) in entries.iter() {
        writeln!(handle, "{key}\t{value}")?;
    }

    Ok(())
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

fn format_as_csv(entries: &Properties) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for (key, value) in entries.iter() {
        writer.write_record([key, value]).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
