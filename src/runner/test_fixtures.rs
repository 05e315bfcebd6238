//! In-memory checker used by runner, checker and command tests.

use std::cell::RefCell;
use std::ffi::OsStr;
use std::io::{Error, ErrorKind};

use super::{HELP_FLAG, ToolOutput, ToolRunner};

pub const MODERN_HELP: &str = "Options:\n  --max-line-length=n  set maximum allowed line length\n";
pub const LEGACY_HELP: &str = "Options:\n  --ignore=errors      skip errors and warnings\n";

pub enum FakeHelp {
    Missing,
    Denied,
    Fails,
    Prints(&'static str),
}

pub struct FakeRunner {
    help: FakeHelp,
    failures: Vec<(String, String)>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new(help: FakeHelp) -> Self {
        Self {
            help,
            failures: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn modern() -> Self {
        Self::new(FakeHelp::Prints(MODERN_HELP))
    }

    pub fn legacy() -> Self {
        Self::new(FakeHelp::Prints(LEGACY_HELP))
    }

    /// Per-file invocations whose path ends with `file_name` exit 1 printing `output`.
    pub fn failing_on(mut self, file_name: &str, output: &str) -> Self {
        let failure = (file_name.to_string(), output.to_string());
        self.failures.push(failure);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn file_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.as_slice() != [HELP_FLAG])
            .collect()
    }

    fn help_output(&self) -> std::io::Result<ToolOutput> {
        match self.help {
            FakeHelp::Missing => Err(Error::new(ErrorKind::NotFound, "no such file")),
            FakeHelp::Denied => Err(Error::new(ErrorKind::PermissionDenied, "denied")),
            FakeHelp::Fails => Ok(ToolOutput {
                success: false,
                stdout: b"usage: pep8 [options] input ...".to_vec(),
            }),
            FakeHelp::Prints(text) => Ok(ToolOutput {
                success: true,
                stdout: text.as_bytes().to_vec(),
            }),
        }
    }
}

impl ToolRunner for FakeRunner {
    fn program(&self) -> &'static str {
        "pep8"
    }

    fn run(&self, args: &[&OsStr]) -> std::io::Result<ToolOutput> {
        let args: Vec<String> = args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.calls.borrow_mut().push(args.clone());

        if args.as_slice() == [HELP_FLAG] {
            return self.help_output();
        }

        let target = args.last().map(String::as_str).unwrap_or_default();
        let failure = self
            .failures
            .iter()
            .find(|(name, _)| target.replace('\\', "/").ends_with(name.as_str()));

        Ok(match failure {
            Some((_, output)) => ToolOutput {
                success: false,
                stdout: output.as_bytes().to_vec(),
            },
            None => ToolOutput {
                success: true,
                stdout: Vec::new(),
            },
        })
    }
}
