use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pep8-guard")]
#[command(author, version, about = "Run a PEP 8 style checker over a Python project")]
#[command(long_about = "Finds Python scripts and runs an external style checker on each.\n\n\
    A file is checked when its name ends in .py, or when it has no extension\n\
    and its first line mentions python.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Style violations found, or the checker failed on --help\n  \
    2 - Checker executable not found\n  \
    3 - Usage, configuration or runtime error")]
pub struct Cli {
    /// Increase diagnostic verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Control color of diagnostic output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the style checker on every Python script under ROOT
    Check(CheckArgs),

    /// List the files that would be checked
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Test-suite directory; the project one level above it is scanned instead of ROOT
    #[arg(long, value_name = "DIR", conflicts_with = "root")]
    pub suite: Option<PathBuf>,

    /// Path to configuration file (default: ROOT/.pep8-guard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Checker executable (overrides config)
    #[arg(long)]
    pub checker: Option<String>,

    /// Argument passed to the checker before all others (repeatable, overrides config)
    #[arg(long = "checker-arg", allow_hyphen_values = true)]
    pub checker_args: Vec<String>,

    /// Maximum line length when the checker supports --max-line-length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<u32>,

    /// Exclude patterns relative to ROOT (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Test-suite directory; the project one level above it is scanned instead of ROOT
    #[arg(long, value_name = "DIR", conflicts_with = "root")]
    pub suite: Option<PathBuf>,

    /// Path to configuration file (default: ROOT/.pep8-guard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exclude patterns relative to ROOT (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
