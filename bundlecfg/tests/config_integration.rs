//! Integration tests for tool configuration.
//!
//! Covers file discovery, precedence between layers, `BUNDLECFG_*`
//! environment overrides, and building a working lookup from the result.
//!
//! Tests that touch environment variables are marked `#[serial]`; the
//! process environment is global.

mod common;

use bundlecfg::config::{Config, ConfigBuilder, OutputFormat, SourceKind};
use bundlecfg::error::Error;
use bundlecfg::PropertyDescriptor;
use common::BundleDir;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_bundlecfg_env_vars() -> Vec<EnvGuard> {
    [
        "BUNDLECFG_BUNDLE_DIR",
        "BUNDLECFG_LOCALE",
        "BUNDLECFG_SOURCE",
        "BUNDLECFG_ENV_PREFIX",
        "BUNDLECFG_REGISTRY",
        "BUNDLECFG_OUTPUT_FORMAT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

#[test]
fn test_file_discovery_upward_traversal() {
    let project = BundleDir::new().with_file("bundlecfg.yaml", "locale: de\n");
    let nested = project.path().join("nested").join("deeply");
    std::fs::create_dir_all(&nested).unwrap();
    let data = BundleDir::new();

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_data_dir(data.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.locale, Some("de".to_string()));
}

#[test]
fn test_project_bundle_dir_relative_to_file() {
    let project = BundleDir::new()
        .with_file("bundlecfg.yaml", "bundle_dir: conf\n")
        .with_file("conf/config.properties", "greeting=hello\n");
    let data = BundleDir::new();

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.bundle_dir, Some(project.path().join("conf")));
    let resolver = config.resolver().unwrap();
    assert_eq!(
        resolver
            .resolve_string(&PropertyDescriptor::new("greeting"))
            .unwrap(),
        Some("hello".to_string())
    );
}

#[test]
fn test_local_file_overrides_project_overrides_user() {
    let project = BundleDir::new()
        .with_file("bundlecfg.yaml", "locale: de\noutput_format: json\n")
        .with_file("bundlecfg.local.yaml", "locale: fr\n");
    let data = BundleDir::new().with_file("config.yaml", "locale: en\nenv_prefix: USERAPP\n");

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.locale, Some("fr".to_string()));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
    assert_eq!(config.env_prefix, Some("USERAPP".to_string()));
}

#[test]
fn test_invalid_project_file_is_reported() {
    let project = BundleDir::new().with_file("bundlecfg.yaml", "unknown_field: 1\n");
    let data = BundleDir::new();

    let result = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data.path())
        .skip_env()
        .build();

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let _clean = clear_bundlecfg_env_vars();
    let _locale = EnvGuard::new("BUNDLECFG_LOCALE", "it");
    let _format = EnvGuard::new("BUNDLECFG_OUTPUT_FORMAT", "plain");

    let project = BundleDir::new().with_file("bundlecfg.yaml", "locale: de\noutput_format: json\n");
    let data = BundleDir::new();

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data.path())
        .build()
        .unwrap();

    assert_eq!(config.locale, Some("it".to_string()));
    assert_eq!(config.output_format, Some(OutputFormat::Plain));
}

#[test]
#[serial]
fn test_programmatic_override_beats_env() {
    let _clean = clear_bundlecfg_env_vars();
    let _source = EnvGuard::new("BUNDLECFG_SOURCE", "environment");

    let config = ConfigBuilder::new()
        .skip_files()
        .with_config(Config {
            source: Some(SourceKind::Directory),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.source, Some(SourceKind::Directory));
}

#[test]
#[serial]
fn test_invalid_env_source_rejected() {
    let _clean = clear_bundlecfg_env_vars();
    let _source = EnvGuard::new("BUNDLECFG_SOURCE", "ldap");

    let result = ConfigBuilder::new().skip_files().build();
    match result {
        Err(Error::Validation { field, .. }) => assert_eq!(field, "BUNDLECFG_SOURCE"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_environment_source_resolves_variables() {
    let _clean = clear_bundlecfg_env_vars();
    let _value = EnvGuard::new("ITEST_DATABASE_URL", "postgres://db");
    let _missing = EnvGuard::remove("ITEST_CONFIG_RETRIES");

    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            source: Some(SourceKind::Environment),
            env_prefix: Some("ITEST".to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();
    let resolver = config.resolver().unwrap();

    let url = PropertyDescriptor::builder("url").bundle("database").build();
    assert_eq!(
        resolver.resolve_string(&url).unwrap(),
        Some("postgres://db".to_string())
    );

    let retries = PropertyDescriptor::builder("retries").default_value("3").build();
    assert_eq!(resolver.resolve_integer(&retries).unwrap(), Some(3));
}

#[test]
fn test_show_config_yaml_shape() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            bundle_dir: Some(PathBuf::from("/srv/conf")),
            ..Default::default()
        })
        .build()
        .unwrap();

    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("bundle_dir: /srv/conf"), "{yaml}");
    assert!(yaml.contains("source: directory"), "{yaml}");
    assert!(yaml.contains("output_format: plain"), "{yaml}");
}
