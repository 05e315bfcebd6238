use std::path::{Path, PathBuf};

use crate::error::{Pep8GuardError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::model::CONFIG_VERSION;

/// Result of loading a configuration, containing both the config and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file the configuration was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.pep8-guard.toml` from the project root, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".pep8-guard.toml";

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(Pep8GuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Reject values the checker or the scanner cannot work with.
///
/// # Errors
/// Returns `Pep8GuardError::Config` describing the first invalid field.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_config_version(config)?;

    if config.checker.program.trim().is_empty() {
        return Err(Pep8GuardError::Config(
            "checker.program must not be empty".to_string(),
        ));
    }
    if config.checker.max_line_length == 0 {
        return Err(Pep8GuardError::Config(
            "checker.max_line_length must be greater than 0".to_string(),
        ));
    }
    if config.checker.fallback_ignore.trim().is_empty() {
        return Err(Pep8GuardError::Config(
            "checker.fallback_ignore must not be empty".to_string(),
        ));
    }
    if config.scanner.suffix.is_empty() {
        return Err(Pep8GuardError::Config(
            "scanner.suffix must not be empty".to_string(),
        ));
    }
    if config.scanner.marker.is_empty() {
        return Err(Pep8GuardError::Config(
            "scanner.marker must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. An explicit path (`load_from_path`)
/// 2. `.pep8-guard.toml` in the project root
/// 3. `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let local = root.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }

        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                return Err(Pep8GuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse_config(&content)?;
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
