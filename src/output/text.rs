use std::io::Write;

use crate::checker::{FileOutcome, RunResult};
use crate::error::Result;
use crate::runner::LineLengthPolicy;

use super::Reporter;

/// Streams plain text: fixed notices for probe failures and the verbatim checker
/// output of each failing file. Clean runs print nothing.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn tool_missing(&mut self, program: &str) -> Result<()> {
        writeln!(self.out, "{program} not found, aborting test.")?;
        Ok(())
    }

    fn probe_rejected(&mut self, program: &str) -> Result<()> {
        writeln!(self.out, "{program} on an empty stream exited with error")?;
        Ok(())
    }

    fn policy_selected(&mut self, _policy: &LineLengthPolicy) -> Result<()> {
        Ok(())
    }

    fn file_checked(&mut self, outcome: &FileOutcome) -> Result<()> {
        if !outcome.passed {
            writeln!(self.out, "{}", outcome.output)?;
        }
        Ok(())
    }

    fn finish(&mut self, _result: RunResult) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
