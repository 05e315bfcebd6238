use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::runner::test_fixtures::{FakeHelp, FakeRunner};

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "setup.py", "");
    touch(dir.path(), "pkg/foo.py", "x=1\n");
    touch(dir.path(), "pkg/README.md", "");
    touch(dir.path(), "bin/tool", "#!/usr/bin/env python\n");
    touch(dir.path(), "bin/run.sh", "#!/bin/sh\n");
    touch(dir.path(), ".git/hooks/hook.py", "");
    dir
}

fn check_text(root: &Path, runner: &FakeRunner) -> (RunResult, String) {
    let config = Config::default();
    let mut out = Vec::new();
    let result = execute_check(root, &config, OutputFormat::Text, runner, &mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

fn checked_files(runner: &FakeRunner, root: &Path) -> Vec<String> {
    runner
        .file_calls()
        .iter()
        .map(|args| {
            Path::new(&args[1])
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn check_args(extra: &[&str]) -> CheckArgs {
    let mut argv = vec!["pep8-guard", "check"];
    argv.extend_from_slice(extra);
    match Cli::parse_from(argv).command {
        Commands::Check(args) => args,
        Commands::List(_) => unreachable!(),
    }
}

#[test]
fn checks_only_discovered_scripts() {
    let dir = project();
    let runner = FakeRunner::modern();

    let (result, out) = check_text(dir.path(), &runner);

    assert_eq!(result, RunResult::Success);
    assert!(out.is_empty());
    assert_eq!(
        checked_files(&runner, dir.path()),
        vec!["bin/tool", "pkg/foo.py", "setup.py"]
    );
}

#[test]
fn missing_checker_touches_no_files() {
    let dir = project();
    let runner = FakeRunner::new(FakeHelp::Missing);

    let (result, out) = check_text(dir.path(), &runner);

    assert_eq!(result.exit_code(), 2);
    assert_eq!(out, "pep8 not found, aborting test.\n");
    assert!(runner.file_calls().is_empty());
}

#[test]
fn violation_output_is_printed_and_fails_run() {
    let dir = project();
    let runner = FakeRunner::modern().failing_on("pkg/foo.py", "foo.py:1:1: E501 line too long\n");

    let (result, out) = check_text(dir.path(), &runner);

    assert_eq!(result.exit_code(), 1);
    assert_eq!(out, "foo.py:1:1: E501 line too long\n");
    assert_eq!(runner.file_calls().len(), 3);
}

#[test]
fn legacy_checker_gets_ignore_option() {
    let dir = project();
    let runner = FakeRunner::legacy();

    check_text(dir.path(), &runner);

    let options: Vec<String> = runner
        .file_calls()
        .into_iter()
        .map(|args| args[0].clone())
        .collect();
    assert_eq!(options, vec!["--ignore=E501"; 3]);
}

#[test]
fn json_format_writes_document() {
    let dir = project();
    let runner = FakeRunner::modern().failing_on("setup.py", "setup.py:1:1: W391");
    let mut out = Vec::new();

    let result = execute_check(
        dir.path(),
        &Config::default(),
        OutputFormat::Json,
        &runner,
        &mut out,
    )
    .unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(result, RunResult::ViolationFound);
    assert_eq!(doc["status"], "violations");
    assert_eq!(doc["checked"], 3);
    assert_eq!(doc["violations"][0]["output"], "setup.py:1:1: W391");
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let runner = FakeRunner::modern();
    let mut out = Vec::new();

    let err = execute_check(
        &dir.path().join("nope"),
        &Config::default(),
        OutputFormat::Text,
        &runner,
        &mut out,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Root directory not found"));
    assert!(runner.calls().is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_extensionless_file_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "tool", "#!/usr/bin/env python\n");
    let target = dir.path().join("tool");
    fs::set_permissions(&target, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not apply to root.
    if fs::File::open(&target).is_ok() {
        return;
    }

    let runner = FakeRunner::modern();
    let mut out = Vec::new();
    let err = execute_check(
        dir.path(),
        &Config::default(),
        OutputFormat::Text,
        &runner,
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, crate::Pep8GuardError::FileRead { .. }));
    assert!(runner.file_calls().is_empty());
}

#[test]
fn overrides_replace_checker_settings() {
    let mut config = Config::default();
    let args = check_args(&[
        "--checker",
        "python3",
        "--checker-arg=-m",
        "--checker-arg",
        "pycodestyle",
        "--max-line-length",
        "79",
        "-x",
        "vendor",
    ]);

    apply_check_overrides(&mut config, &args).unwrap();

    assert_eq!(config.checker.program, "python3");
    assert_eq!(config.checker.args, vec!["-m", "pycodestyle"]);
    assert_eq!(config.checker.max_line_length, 79);
    assert_eq!(config.scanner.exclude, vec!["vendor"]);
}

#[test]
fn overrides_keep_config_when_flags_absent() {
    let mut config = Config::default();
    config.checker.args = vec!["--first".to_string()];
    config.scanner.exclude = vec!["build".to_string()];

    apply_check_overrides(&mut config, &check_args(&["-x", "dist"])).unwrap();

    assert_eq!(config.checker.program, "pep8");
    assert_eq!(config.checker.args, vec!["--first"]);
    assert_eq!(config.scanner.exclude, vec!["build", "dist"]);
}

#[test]
fn zero_max_line_length_override_is_rejected() {
    let mut config = Config::default();
    let args = check_args(&["--max-line-length", "0"]);

    let err = apply_check_overrides(&mut config, &args).unwrap_err();
    assert!(err.to_string().contains("max_line_length"));
}
