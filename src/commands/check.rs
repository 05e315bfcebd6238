use std::io::Write;
use std::path::Path;

use crate::EXIT_RUNTIME_ERROR;
use crate::checker::{RunResult, run_checks};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::error::Result;
use crate::output::{JsonReporter, OutputFormat, TextReporter};
use crate::runner::{ProcessRunner, ToolRunner};

use super::context::{
    apply_exclude_overrides, build_scanner, ensure_root, load_config, resolve_root,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "check aborted");
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

/// # Errors
/// Returns an error for configuration problems and unrecoverable runtime failures.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let root = resolve_root(&args.root, args.suite.as_deref());

    // 1. Load configuration
    let mut config = load_config(&root, args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_check_overrides(&mut config, args)?;

    // 3. Probe and check
    let runner = ProcessRunner::from_config(&config.checker);
    let stdout = std::io::stdout();
    let result = execute_check(&root, &config, args.format, &runner, stdout.lock())?;

    Ok(result.exit_code())
}

/// # Errors
/// Returns an error if the resulting configuration is invalid.
pub fn apply_check_overrides(config: &mut Config, args: &CheckArgs) -> Result<()> {
    if let Some(program) = &args.checker {
        config.checker.program.clone_from(program);
    }

    if !args.checker_args.is_empty() {
        config.checker.args.clone_from(&args.checker_args);
    }

    if let Some(max_line_length) = args.max_line_length {
        config.checker.max_line_length = max_line_length;
    }

    apply_exclude_overrides(config, &args.exclude)
}

/// Run the probe and every per-file check under `root`, reporting to `out`.
///
/// # Errors
/// Returns an error if `root` is not a directory, or on any fatal failure of the run.
pub fn execute_check<R, W>(
    root: &Path,
    config: &Config,
    format: OutputFormat,
    runner: &R,
    out: W,
) -> Result<RunResult>
where
    R: ToolRunner + ?Sized,
    W: Write,
{
    ensure_root(root)?;
    let scanner = build_scanner(config)?;
    let candidates = scanner.candidates(root);

    match format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(out);
            run_checks(runner, &config.checker, candidates, &mut reporter)
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(out);
            run_checks(runner, &config.checker, candidates, &mut reporter)
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
