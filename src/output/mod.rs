mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use crate::checker::{FileOutcome, RunResult};
use crate::error::Result;
use crate::runner::LineLengthPolicy;

/// Receives the events of one check run, in order.
pub trait Reporter {
    /// The checker executable could not be found. No files follow.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn tool_missing(&mut self, program: &str) -> Result<()>;

    /// The checker exited non-zero on `--help`. No files follow.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn probe_rejected(&mut self, program: &str) -> Result<()>;

    /// The probe succeeded and selected `policy` for every file.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn policy_selected(&mut self, policy: &LineLengthPolicy) -> Result<()>;

    /// # Errors
    /// Returns an error if the output cannot be written.
    fn file_checked(&mut self, outcome: &FileOutcome) -> Result<()>;

    /// Called exactly once, last.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, result: RunResult) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
