//! Integration tests for the `get` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn env_with_config_bundle() -> TestEnv {
    let env = TestEnv::new();
    env.write_bundle(
        "config.properties",
        "greeting=hello\nport=8080\nenabled=TRUE\nretries=three\n",
    );
    env
}

#[test]
fn test_get_present_string() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "greeting"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_get_absent_integer_uses_default() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "timeout", "--type", "integer", "--default", "3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_get_missing_mandatory_exit_code() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "dbUrl", "--mandatory"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("dbUrl"))
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_get_malformed_integer_exit_code() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "retries", "--type", "integer"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("three"));
}

#[test]
fn test_get_boolean_is_lenient() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "enabled", "--type", "boolean"])
        .assert()
        .success()
        .stdout("true\n");
    env.command()
        .args(["get", "--key", "greeting", "--type", "boolean"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_get_absent_prints_nothing() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "missing"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_get_json_output() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "missing", "--format", "json"])
        .assert()
        .success()
        .stdout("null\n");
    env.command()
        .args(["get", "--key", "port", "--type", "integer", "--format", "json"])
        .assert()
        .success()
        .stdout("8080\n");
    env.command()
        .args(["get", "--key", "greeting", "--format", "json"])
        .assert()
        .success()
        .stdout("\"hello\"\n");
}

#[test]
fn test_get_empty_key_returns_default_even_if_mandatory() {
    let env = env_with_config_bundle();
    env.command()
        .args(["get", "--key", "", "--mandatory", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
}

#[test]
fn test_get_named_bundle_with_locale() {
    let env = TestEnv::new();
    env.write_bundle("messages.properties", "greeting=hello\nfarewell=bye\n");
    env.write_bundle("messages_fr.properties", "greeting=bonjour\n");

    env.command()
        .args(["--locale", "fr_FR", "get", "--bundle", "messages", "--key", "greeting"])
        .assert()
        .success()
        .stdout("bonjour\n");
    env.command()
        .args(["--locale", "fr_FR", "get", "--bundle", "messages", "--key", "farewell"])
        .assert()
        .success()
        .stdout("bye\n");
}

#[test]
fn test_get_from_environment_source() {
    let env = TestEnv::new();
    env.command_bare()
        .env("CLITEST_DATABASE_URL", "postgres://db")
        .args([
            "--source",
            "environment",
            "--env-prefix",
            "CLITEST",
            "get",
            "--bundle",
            "database",
            "--key",
            "url",
        ])
        .assert()
        .success()
        .stdout("postgres://db\n");
}

#[test]
fn test_get_uses_project_config() {
    let env = TestEnv::new();
    env.write_work_file("bundlecfg.yaml", "bundle_dir: conf\noutput_format: json\n");
    env.write_work_file("conf/config.yaml", "greeting: hi\n");

    env.command_bare()
        .args(["get", "--key", "greeting"])
        .assert()
        .success()
        .stdout("\"hi\"\n");
}

#[test]
fn test_get_yaml_value_as_written() {
    let env = TestEnv::new();
    env.write_bundle("app.yaml", "version: 1.10\nmask: 0x1F\n");
    env.command()
        .args(["get", "--bundle", "app", "--key", "version"])
        .assert()
        .success()
        .stdout("1.10\n");
}

#[test]
fn test_get_from_latin1_properties() {
    let env = TestEnv::new();
    env.write_bundle_bytes("legacy.properties", b"greeting=caf\xe9\n");
    env.command()
        .args(["get", "--bundle", "legacy", "--key", "greeting"])
        .assert()
        .success()
        .stdout("caf\u{e9}\n");
}
