//! Main entry point for the bundlecfg CLI.
//!
//! - `get`: Resolve a single property
//! - `check`: Resolve every property in a registry file
//! - `list`: List the entries of a bundle
//! - `validate`: Validate a configuration file
//! - `show-config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

use bundlecfg_cli::cli::{Cli, Command};
use bundlecfg_cli::utils::GlobalOptions;
use clap::Parser;

fn main() {
    // Usage errors exit with the invalid-arguments code; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 4 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let _logger = bundlecfg::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        bundle_dir: cli.bundle_dir,
        locale: cli.locale,
        source: cli.source,
        env_prefix: cli.env_prefix,
    };

    let result = match cli.command {
        Command::Get(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::ShowConfig(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
