#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pep8-guard binary.
#[macro_export]
macro_rules! pep8_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pep8-guard"))
    };
}

pub const MODERN_HELP: &str = "  --max-line-length=n  set maximum allowed line length";
pub const LEGACY_HELP: &str = "  --ignore=errors      skip errors and warnings";

/// A project tree plus a fake checker living outside of it.
pub struct TestFixture {
    pub project: TempDir,
    pub tools: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty project directory.
    pub fn new() -> Self {
        Self {
            project: TempDir::new().expect("Failed to create project directory"),
            tools: TempDir::new().expect("Failed to create tools directory"),
        }
    }

    /// Returns the path to the project directory.
    pub fn path(&self) -> &Path {
        self.project.path()
    }

    /// Creates a file with the given content in the project directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.project.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// A small Python project with a `.git` directory and a shell helper.
    pub fn with_python_project(self) -> Self {
        self.create_file("setup.py", "import setuptools\n");
        self.create_file("pkg/__init__.py", "");
        self.create_file("pkg/foo.py", "x = 1\n");
        self.create_file("bin/tool", "#!/usr/bin/env python\nprint('hi')\n");
        self.create_file("bin/deploy", "#!/bin/sh\necho deploy\n");
        self.create_file("README.md", "# demo\n");
        self.create_file(".git/hooks/pre-commit.py", "broken = (\n");
        self
    }

    /// File recording the arguments of every per-file invocation, one line each.
    pub fn call_log(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    pub fn logged_calls(&self) -> Vec<String> {
        fs::read_to_string(self.call_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Writes a `sh` script acting as the checker and returns its path.
    ///
    /// `--help` prints `help` and exits with `help_status`; any other invocation is
    /// logged, and fails printing `output` when its last argument ends with `failing`.
    pub fn fake_checker(
        &self,
        help: &str,
        help_status: i32,
        failing: Option<(&str, &str)>,
    ) -> PathBuf {
        let failing_case = failing.map_or_else(String::new, |(suffix, output)| {
            format!(
                "case \"$2\" in\n  *{suffix}) printf '%s\\n' '{output}'; exit 1 ;;\nesac\n"
            )
        });
        let script = format!(
            "if [ \"$1\" = \"--help\" ]; then\n\
             printf '%s\\n' '{help}'\n\
             exit {help_status}\nfi\n\
             printf '%s %s\\n' \"$1\" \"$2\" >> '{log}'\n\
             {failing_case}exit 0\n",
            log = self.call_log().display(),
        );

        let path = self.tools.path().join("checker.sh");
        fs::write(&path, script).expect("Failed to write fake checker");
        path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
