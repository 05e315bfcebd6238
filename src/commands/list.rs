use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, ListArgs};
use crate::config::Config;
use crate::error::Result;
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

use super::context::{
    apply_exclude_overrides, build_scanner, ensure_root, load_config, resolve_root,
};

#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

/// # Errors
/// Returns an error for configuration problems or unreadable candidate files.
pub fn run_list_impl(args: &ListArgs, cli: &Cli) -> Result<()> {
    let root = resolve_root(&args.root, args.suite.as_deref());
    let mut config = load_config(&root, args.config.as_deref(), cli.no_config)?;
    apply_exclude_overrides(&mut config, &args.exclude)?;

    let stdout = std::io::stdout();
    let count = write_candidates(&root, &config, stdout.lock())?;
    tracing::info!(count, "listed checkable files");
    Ok(())
}

/// Print each checkable path under `root`, one per line. Returns how many were printed.
///
/// # Errors
/// Returns an error if `root` is not a directory, a candidate cannot be inspected,
/// or the output cannot be written.
pub fn write_candidates<W: Write>(root: &Path, config: &Config, mut out: W) -> Result<usize> {
    ensure_root(root)?;
    let scanner = build_scanner(config)?;

    let mut count = 0;
    for path in scanner.candidates(root) {
        writeln!(out, "{}", path?.display())?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
