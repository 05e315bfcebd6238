//! Diagnostic logging on stderr.
//!
//! Standard output carries the check verdict only, so every log event goes to stderr.
//! The level follows `-v` and can be overridden with `PEP8_GUARD_LOG` using
//! `EnvFilter` directives (e.g. `PEP8_GUARD_LOG=pep8_guard=trace`).

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::ColorChoice;

pub const LOG_ENV: &str = "PEP8_GUARD_LOG";

#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: u8, color: ColorChoice) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi(color))
        .try_init();
}
