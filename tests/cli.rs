use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use build_analytics::compat::FORMAT_VERSION;
use tempfile::tempdir;

const FAILED_BUILD: &str = include_str!("fixtures/failed_build.json");

fn plugin(data_dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_build-analytics"));
    command
        .env_clear()
        .env("BITRISE_PLUGIN_INPUT_DATA_DIR", data_dir)
        .env("CI", "false");
    command
}

fn trigger(data_dir: &Path, format_version: &str) -> Command {
    let mut command = plugin(data_dir);
    command
        .env("BITRISE_PLUGIN_INPUT_PLUGIN_MODE", "trigger")
        .env("BITRISE_PLUGIN_INPUT_FORMAT_VERSION", format_version);
    command
}

fn run_with_stdin(mut command: Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn plugin");
    let mut pipe = child.stdin.take().expect("stdin handle");
    // The plugin may exit before reading, e.g. when analytics is turned off.
    pipe.write_all(stdin.as_bytes()).ok();
    drop(pipe);
    child.wait_with_output().expect("wait for plugin")
}

fn run_without_stdin(mut command: Command) -> Output {
    command
        .stdin(Stdio::null())
        .output()
        .expect("run plugin")
}

#[test]
fn manual_invocation_prints_help() {
    let dir = tempdir().expect("tempdir");
    let output = run_without_stdin(plugin(dir.path()));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bitrise Analytics plugin"));
    assert!(stdout.contains("Turn sending anonymized usage information on"));
    assert!(stdout.contains("--loglevel"));
}

#[test]
fn version_flag_prints_package_version() {
    let dir = tempdir().expect("tempdir");
    let mut command = plugin(dir.path());
    command.arg("--version");
    let output = run_without_stdin(command);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn off_and_on_toggle_the_preference_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yml");

    let mut off = plugin(dir.path());
    off.arg("off");
    assert!(run_without_stdin(off).status.success());
    let saved = fs::read_to_string(&config_path).expect("read config");
    assert!(saved.contains("is_analytics_disabled: true"));

    let mut on = plugin(dir.path());
    on.arg("on");
    assert!(run_without_stdin(on).status.success());
    let saved = fs::read_to_string(&config_path).expect("read config");
    assert!(saved.contains("is_analytics_disabled: false"));
}

#[test]
fn disabled_analytics_ignores_the_report() {
    let dir = tempdir().expect("tempdir");
    let mut off = plugin(dir.path());
    off.arg("off");
    assert!(run_without_stdin(off).status.success());

    let output = run_with_stdin(trigger(dir.path(), FORMAT_VERSION), "invalid json");
    assert!(output.status.success());
}

#[test]
fn missing_host_format_version_skips_without_failing() {
    let dir = tempdir().expect("tempdir");
    let output = run_with_stdin(trigger(dir.path(), ""), FAILED_BUILD);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bitrise-cli version >= 1.6.0"));
}

#[test]
fn newer_host_format_skips_without_failing() {
    let dir = tempdir().expect("tempdir");
    let output = run_with_stdin(trigger(dir.path(), "999"), FAILED_BUILD);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Outdated analytics plugin"));
}

#[test]
fn unparsable_host_format_version_fails() {
    let dir = tempdir().expect("tempdir");
    let output = run_with_stdin(trigger(dir.path(), "abc"), FAILED_BUILD);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse bitrise format version (abc)"));
}

#[test]
fn malformed_stdin_report_fails() {
    let dir = tempdir().expect("tempdir");
    let output = run_with_stdin(trigger(dir.path(), FORMAT_VERSION), "invalid json");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("(invalid json)"));
}

#[test]
fn malformed_env_report_fails() {
    let dir = tempdir().expect("tempdir");
    let mut command = trigger(dir.path(), FORMAT_VERSION);
    command.env("BITRISE_PLUGIN_INPUT_PAYLOAD", "{broken");
    let output = run_without_stdin(command);
    assert!(!output.status.success());
}

#[test]
fn no_report_anywhere_is_not_an_error() {
    let dir = tempdir().expect("tempdir");
    let output = run_without_stdin(trigger(dir.path(), FORMAT_VERSION));
    assert!(output.status.success());
}
