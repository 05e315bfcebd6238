use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_CHECKER: &str = "pep8";
pub const DEFAULT_MAX_LINE_LENGTH: u32 = 120;
pub const DEFAULT_FALLBACK_IGNORE: &str = "E501";
pub const DEFAULT_SUFFIX: &str = ".py";
pub const DEFAULT_MARKER: &str = "python";

/// External checker invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Executable name or path, resolved through `PATH` when bare.
    pub program: String,

    /// Arguments placed before every probe and per-file argument
    /// (e.g. `["-m", "pycodestyle"]` with `program = "python3"`).
    pub args: Vec<String>,

    /// Value passed as `--max-line-length=N` when the checker supports it.
    pub max_line_length: u32,

    /// Rule suppressed with `--ignore=<rule>` when it does not.
    pub fallback_ignore: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_CHECKER.to_string(),
            args: Vec::new(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            fallback_ignore: DEFAULT_FALLBACK_IGNORE.to_string(),
        }
    }
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Script suffix, matched case-insensitively against file names containing a dot.
    pub suffix: String,

    /// Token searched in the first line of files without a dot in their name.
    pub marker: String,

    /// Extra glob patterns; matching files and directories are skipped.
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}
