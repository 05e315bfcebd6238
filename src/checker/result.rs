use std::path::PathBuf;

use crate::{EXIT_SUCCESS, EXIT_TOOL_UNAVAILABLE, EXIT_VIOLATIONS};

/// Run-wide verdict.
///
/// Folding is monotonic: once `ViolationFound`, a clean file never resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunResult {
    #[default]
    Success,
    ViolationFound,
    ToolUnavailable,
}

impl RunResult {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => EXIT_SUCCESS,
            Self::ViolationFound => EXIT_VIOLATIONS,
            Self::ToolUnavailable => EXIT_TOOL_UNAVAILABLE,
        }
    }

    /// Fold one file outcome into the verdict.
    #[must_use]
    pub const fn record(self, outcome: &FileOutcome) -> Self {
        match (self, outcome.passed) {
            (Self::Success, false) => Self::ViolationFound,
            (current, _) => current,
        }
    }
}

/// Result of running the checker on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub passed: bool,
    /// Captured checker output with trailing whitespace removed.
    pub output: String,
}

impl FileOutcome {
    #[must_use]
    pub const fn passed(path: PathBuf) -> Self {
        Self {
            path,
            passed: true,
            output: String::new(),
        }
    }

    #[must_use]
    pub const fn failed(path: PathBuf, output: String) -> Self {
        Self {
            path,
            passed: false,
            output,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
