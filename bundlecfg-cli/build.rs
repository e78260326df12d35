//! Build script for bundlecfg-cli.
//!
//! Renders a man page into `OUT_DIR/man` with clap_mangen. The command
//! structure is declared here because a build script cannot depend on the
//! crate it builds; keep it in step with `src/cli.rs`.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("bundlecfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve typed configuration properties from named bundles")
        .long_about(
            "Command-line tool for resolving string, integer and boolean properties \
             from property bundles on disk or in the environment",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bundle-dir")
                .long("bundle-dir")
                .help("Directory holding bundle files")
                .value_name("PATH")
                .global(true)
                .env("BUNDLECFG_BUNDLE_DIR"),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .help("Locale used to pick locale-specific bundle files")
                .value_name("TAG")
                .global(true)
                .env("BUNDLECFG_LOCALE"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .help("Where bundles are read from")
                .value_parser(["directory", "environment"])
                .global(true),
        )
        .arg(
            Arg::new("env-prefix")
                .long("env-prefix")
                .help("Variable prefix for the environment source")
                .value_name("PREFIX")
                .global(true),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Resolve a single property")
                .long_about("Resolve one property and print it as a string, integer or boolean"),
            Command::new("check")
                .about("Resolve every property in a registry file")
                .long_about("Resolve a property registry and report each property's outcome"),
            Command::new("list")
                .about("List the entries of a bundle")
                .long_about("Display the merged entries of a directory bundle"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a bundlecfg configuration file for errors"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration after files, environment and flags are merged"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("bundlecfg.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
