use std::io::Write;

use serde::Serialize;

use crate::checker::{FileOutcome, RunResult};
use crate::error::Result;
use crate::runner::LineLengthPolicy;

use super::Reporter;

/// Buffers the run and writes one JSON document when it finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    probe: ProbeStatus,
    policy: Option<LineLengthPolicy>,
    checked: usize,
    violations: Vec<Violation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ProbeStatus {
    Ok,
    ToolUnavailable,
    ProbeFailed,
}

#[derive(Serialize)]
struct Violation {
    path: String,
    output: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'static str,
    exit_code: i32,
    policy: Option<String>,
    checked: usize,
    violations: &'a [Violation],
}

impl<W: Write> JsonReporter<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            probe: ProbeStatus::Ok,
            policy: None,
            checked: 0,
            violations: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    const fn status(&self, result: RunResult) -> &'static str {
        match (self.probe, result) {
            (ProbeStatus::ToolUnavailable, _) | (_, RunResult::ToolUnavailable) => {
                "tool_unavailable"
            }
            (ProbeStatus::ProbeFailed, _) => "probe_failed",
            (ProbeStatus::Ok, RunResult::ViolationFound) => "violations",
            (ProbeStatus::Ok, RunResult::Success) => "passed",
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn tool_missing(&mut self, _program: &str) -> Result<()> {
        self.probe = ProbeStatus::ToolUnavailable;
        Ok(())
    }

    fn probe_rejected(&mut self, _program: &str) -> Result<()> {
        self.probe = ProbeStatus::ProbeFailed;
        Ok(())
    }

    fn policy_selected(&mut self, policy: &LineLengthPolicy) -> Result<()> {
        self.policy = Some(policy.clone());
        Ok(())
    }

    fn file_checked(&mut self, outcome: &FileOutcome) -> Result<()> {
        self.checked += 1;
        if !outcome.passed {
            self.violations.push(Violation {
                path: outcome.path.to_string_lossy().replace('\\', "/"),
                output: outcome.output.clone(),
            });
        }
        Ok(())
    }

    fn finish(&mut self, result: RunResult) -> Result<()> {
        let document = JsonOutput {
            status: self.status(result),
            exit_code: result.exit_code(),
            policy: self.policy.as_ref().map(LineLengthPolicy::argument),
            checked: self.checked,
            violations: &self.violations,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
