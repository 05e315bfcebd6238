use std::ffi::OsStr;
use std::fmt;
use std::io::ErrorKind;

use crate::config::CheckerConfig;
use crate::error::{Pep8GuardError, Result};

use super::ToolRunner;

pub const HELP_FLAG: &str = "--help";

/// Advertised in `--help` by checkers that accept a configurable line length.
pub const MAX_LINE_LENGTH_FLAG: &str = "--max-line-length";

/// How long lines are handled on every per-file invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineLengthPolicy {
    MaxLineLength(u32),
    Ignore(String),
}

impl LineLengthPolicy {
    /// The single checker argument implementing this policy.
    #[must_use]
    pub fn argument(&self) -> String {
        match self {
            Self::MaxLineLength(limit) => format!("{MAX_LINE_LENGTH_FLAG}={limit}"),
            Self::Ignore(rule) => format!("--ignore={rule}"),
        }
    }
}

impl fmt::Display for LineLengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argument())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The executable could not be found.
    ToolMissing,
    /// The executable ran but `--help` exited non-zero.
    Rejected,
    Ready(LineLengthPolicy),
}

/// Run `<checker> --help` once and decide how files will be checked.
///
/// A non-zero exit takes precedence over the help text: a broken checker is
/// `Rejected` whatever it prints.
///
/// # Errors
/// Returns `Pep8GuardError::Spawn` for any spawn failure other than a missing executable.
pub fn probe<R: ToolRunner + ?Sized>(runner: &R, config: &CheckerConfig) -> Result<ProbeOutcome> {
    let output = match runner.run(&[OsStr::new(HELP_FLAG)]) {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ProbeOutcome::ToolMissing),
        Err(source) => {
            return Err(Pep8GuardError::Spawn {
                program: runner.program().to_string(),
                source,
            });
        }
    };

    if !output.success {
        return Ok(ProbeOutcome::Rejected);
    }

    let policy = if advertises(&output.stdout, MAX_LINE_LENGTH_FLAG) {
        LineLengthPolicy::MaxLineLength(config.max_line_length)
    } else {
        LineLengthPolicy::Ignore(config.fallback_ignore.clone())
    };
    Ok(ProbeOutcome::Ready(policy))
}

fn advertises(help: &[u8], flag: &str) -> bool {
    let flag = flag.as_bytes();
    help.windows(flag.len()).any(|window| window == flag)
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
