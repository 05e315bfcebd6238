mod filter;

pub use filter::{ExcludePatterns, FileFilter, ScriptFilter, read_first_line};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if a candidate file cannot be inspected.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Project root for a tool living in a test-suite directory one level below it.
#[must_use]
pub fn project_root_from_suite(suite_dir: &Path) -> PathBuf {
    suite_dir.join("..")
}

/// Version-control metadata directories are never descended into.
///
/// Any component starting with `.git` is treated as metadata, which also covers
/// `.github` and `.gitlab` trees.
#[must_use]
pub fn is_vcs_metadata(dir_name: &str) -> bool {
    dir_name.starts_with(".git")
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    excludes: ExcludePatterns,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            excludes: ExcludePatterns::empty(),
        }
    }

    #[must_use]
    pub const fn with_excludes(filter: F, excludes: ExcludePatterns) -> Self {
        Self { filter, excludes }
    }

    /// Lazily walk `root`, yielding checkable files in file-name order.
    pub fn candidates(&self, root: &Path) -> Candidates<'_, F> {
        Candidates {
            walker: WalkDir::new(root).sort_by_file_name().into_iter(),
            root: root.to_path_buf(),
            scanner: self,
        }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.candidates(root).collect()
    }
}

/// Iterator over checkable files below a root. Not restartable.
pub struct Candidates<'a, F: FileFilter> {
    walker: walkdir::IntoIter,
    root: PathBuf,
    scanner: &'a DirectoryScanner<F>,
}

impl<F: FileFilter> Candidates<'_, F> {
    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.scanner.excludes.is_excluded(self.relative(path))
    }

    fn prunes_dir(&self, entry: &DirEntry) -> bool {
        is_vcs_metadata(&entry.file_name().to_string_lossy()) || self.is_excluded(entry.path())
    }

    /// Regular files, and symlinks that resolve to one.
    fn is_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
    }
}

impl<F: FileFilter> Iterator for Candidates<'_, F> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() > 0 && self.prunes_dir(&entry) {
                    tracing::trace!(dir = %entry.path().display(), "pruned");
                    self.walker.skip_current_dir();
                }
                continue;
            }

            if !Self::is_file(&entry) || self.is_excluded(entry.path()) {
                continue;
            }

            match self.scanner.filter.is_checkable(entry.path()) {
                Ok(true) => return Some(Ok(entry.into_path())),
                Ok(false) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
