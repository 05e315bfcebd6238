use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use crate::error::{Pep8GuardError, Result};
use crate::scanner::{DirectoryScanner, ExcludePatterns, ScriptFilter, project_root_from_suite};

/// The directory to scan: the parent of `suite` when given, otherwise `root`.
#[must_use]
pub fn resolve_root(root: &Path, suite: Option<&Path>) -> PathBuf {
    suite.map_or_else(|| root.to_path_buf(), project_root_from_suite)
}

/// Load the configuration for a run rooted at `root`.
///
/// # Errors
/// Returns an error if a configuration file exists but cannot be read or is invalid.
pub fn load_config(root: &Path, config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        tracing::debug!("configuration loading disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load(root)?,
    };
    if let Some(path) = &result.source {
        tracing::info!(path = %path.display(), "loaded configuration");
    } else {
        tracing::debug!("no configuration file, using defaults");
    }
    Ok(result.config)
}

/// Append CLI exclude patterns and re-validate.
///
/// # Errors
/// Returns an error if the resulting configuration is invalid.
pub fn apply_exclude_overrides(config: &mut Config, exclude: &[String]) -> Result<()> {
    config.scanner.exclude.extend(exclude.iter().cloned());
    validate_config(config)
}

/// # Errors
/// Returns `Pep8GuardError::Config` if `root` is not a directory.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    let message = format!("Root directory not found: {}", root.display());
    Err(Pep8GuardError::Config(message))
}

/// Build the discoverer described by the scanner section.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn build_scanner(config: &Config) -> Result<DirectoryScanner<ScriptFilter>> {
    let filter = ScriptFilter::from_config(&config.scanner);
    let excludes = ExcludePatterns::new(&config.scanner.exclude)?;
    Ok(DirectoryScanner::with_excludes(filter, excludes))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
