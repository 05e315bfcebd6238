use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{Pep8GuardError, Result};

pub trait FileFilter {
    /// Decide whether a regular file should be handed to the checker.
    ///
    /// # Errors
    /// Returns an error if the file has to be opened for inspection and cannot be read.
    fn is_checkable(&self, path: &Path) -> Result<bool>;
}

/// Classifies Python scripts by suffix, or by interpreter marker on the first line
/// for file names without a dot.
#[derive(Debug, Clone)]
pub struct ScriptFilter {
    suffix: String,
    marker: String,
}

impl ScriptFilter {
    #[must_use]
    pub fn new(suffix: &str, marker: &str) -> Self {
        Self {
            suffix: suffix.to_lowercase(),
            marker: marker.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(&config.suffix, &config.marker)
    }

    fn has_script_suffix(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(&self.suffix)
    }

    fn has_marker_line(&self, path: &Path) -> Result<bool> {
        Ok(read_first_line(path)?.contains(&self.marker))
    }
}

impl FileFilter for ScriptFilter {
    fn is_checkable(&self, path: &Path) -> Result<bool> {
        let Some(file_name) = path.file_name() else {
            return Ok(false);
        };
        let file_name = file_name.to_string_lossy();

        if file_name.contains('.') {
            Ok(self.has_script_suffix(&file_name))
        } else {
            self.has_marker_line(path)
        }
    }
}

/// Read the first line of a file with trailing whitespace removed.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Invalid UTF-8 is replaced rather than
/// rejected; extensionless binaries are common in project trees and only the marker
/// substring matters.
///
/// # Errors
/// Returns `Pep8GuardError::FileRead` if the file cannot be opened or read.
pub fn read_first_line(path: &Path) -> Result<String> {
    let to_error = |source| Pep8GuardError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let line = read_line_bytes(&mut BufReader::new(file)).map_err(to_error)?;

    Ok(String::from_utf8_lossy(&line).trim_end().to_string())
}

fn read_line_bytes<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(line);
        }
        if let Some(end) = buf.iter().position(|&b| matches!(b, b'\n' | b'\r')) {
            line.extend_from_slice(&buf[..end]);
            return Ok(line);
        }
        line.extend_from_slice(buf);
        let consumed = buf.len();
        reader.consume(consumed);
    }
}

/// User supplied glob patterns, matched against paths relative to the scan root.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    set: GlobSet,
}

impl ExcludePatterns {
    /// Compile exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| Pep8GuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| Pep8GuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { set })
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.set.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
