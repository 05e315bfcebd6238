mod result;

pub use result::{FileOutcome, RunResult};

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::config::CheckerConfig;
use crate::error::{Pep8GuardError, Result};
use crate::output::Reporter;
use crate::runner::{ProbeOutcome, ToolRunner, probe};

/// Probe the checker, then run it on every candidate path.
///
/// Candidates are pulled lazily, so nothing is read from the tree when the probe
/// ends the run early. A failing file never stops the loop.
///
/// # Errors
/// Returns an error when the probe or a per-file invocation cannot be spawned, when a
/// candidate cannot be inspected, or when the reporter fails to write.
pub fn run_checks<R, I, P>(
    runner: &R,
    config: &CheckerConfig,
    candidates: I,
    reporter: &mut P,
) -> Result<RunResult>
where
    R: ToolRunner + ?Sized,
    I: IntoIterator<Item = Result<PathBuf>>,
    P: Reporter + ?Sized,
{
    let policy = match probe(runner, config)? {
        ProbeOutcome::ToolMissing => {
            tracing::warn!(program = runner.program(), "checker not found");
            reporter.tool_missing(runner.program())?;
            return finish(reporter, RunResult::ToolUnavailable, 0);
        }
        ProbeOutcome::Rejected => {
            tracing::warn!(program = runner.program(), "checker rejected --help");
            reporter.probe_rejected(runner.program())?;
            return finish(reporter, RunResult::ViolationFound, 0);
        }
        ProbeOutcome::Ready(policy) => policy,
    };

    tracing::info!(program = runner.program(), %policy, "checker ready");
    reporter.policy_selected(&policy)?;

    let option = policy.argument();
    let mut result = RunResult::Success;
    let mut checked = 0;
    for path in candidates {
        let outcome = check_file(runner, &option, path?)?;
        checked += 1;
        result = result.record(&outcome);
        reporter.file_checked(&outcome)?;
    }

    finish(reporter, result, checked)
}

fn finish<P: Reporter + ?Sized>(
    reporter: &mut P,
    result: RunResult,
    checked: usize,
) -> Result<RunResult> {
    tracing::info!(checked, ?result, "check finished");
    reporter.finish(result)?;
    Ok(result)
}

/// Run `<checker> <option> <path>` and capture its verdict.
///
/// # Errors
/// Returns `Pep8GuardError::Spawn` if the checker cannot be started.
pub fn check_file<R: ToolRunner + ?Sized>(
    runner: &R,
    option: &str,
    path: PathBuf,
) -> Result<FileOutcome> {
    tracing::debug!(path = %path.display(), "checking");
    let output = runner
        .run(&[OsStr::new(option), path.as_os_str()])
        .map_err(|source| spawn_error(runner, source))?;

    if output.success {
        Ok(FileOutcome::passed(path))
    } else {
        tracing::debug!(path = %path.display(), "style violations reported");
        Ok(FileOutcome::failed(path, output.text()))
    }
}

fn spawn_error<R: ToolRunner + ?Sized>(runner: &R, source: std::io::Error) -> Pep8GuardError {
    Pep8GuardError::Spawn {
        program: runner.program().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
