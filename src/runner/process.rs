use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::config::CheckerConfig;

/// Captured result of one checker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: Vec<u8>,
}

impl ToolOutput {
    /// Standard output decoded lossily, trailing whitespace removed.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim_end().to_string()
    }
}

/// Trait for invoking the external checker.
pub trait ToolRunner {
    /// Name shown in messages and errors.
    fn program(&self) -> &str;

    /// Run the checker with `args` and wait for it to exit.
    ///
    /// # Errors
    /// Returns the spawn error unchanged, so `ErrorKind::NotFound` identifies a
    /// missing executable.
    fn run(&self, args: &[&OsStr]) -> std::io::Result<ToolOutput>;
}

/// Runs the checker as a child process. Standard output is captured, standard error
/// passes through to the terminal.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    prefix_args: Vec<String>,
}

impl ProcessRunner {
    #[must_use]
    pub fn new(program: impl Into<String>, prefix_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args,
        }
    }

    #[must_use]
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }
}

impl ToolRunner for ProcessRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&OsStr]) -> std::io::Result<ToolOutput> {
        let output = Command::new(&self.program)
            .args(&self.prefix_args)
            .args(args)
            .stderr(Stdio::inherit())
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: output.stdout,
        })
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
