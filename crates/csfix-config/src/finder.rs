//! File-discovery configuration
//!
//! The engine owns the actual traversal; this module describes where to
//! look and what to skip, and offers a one-shot scan for callers that want
//! the file list themselves (custom-fixer discovery, tests).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Marker files that identify a project root when walking upward
const ROOT_MARKERS: &[&str] = &["composer.json", ".git"];

/// Where the engine should look for files and what it should skip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinderConfig {
    /// Directories to scan
    pub roots: Vec<PathBuf>,
    /// Glob patterns for paths to skip
    pub exclude: Vec<String>,
    /// File-name patterns to include, e.g. `*.php`
    pub name_patterns: Vec<String>,
    /// File-name patterns to skip even when included above
    pub not_name_patterns: Vec<String>,
}

impl FinderConfig {
    /// Scan a single directory with no exclusions
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![path.into()],
            ..Self::default()
        }
    }

    /// Default project scan: rooted at the discovered project root,
    /// excluding the `build` directory, matching PHP sources only.
    pub fn project_default() -> Self {
        Self {
            roots: vec![project_root()],
            exclude: vec!["build".to_string()],
            name_patterns: vec!["*.php".to_string()],
            not_name_patterns: Vec::new(),
        }
    }

    /// Whether a path hits one of the exclusion patterns
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }
            // Bare names and trailing-slash patterns match as path segments
            let segment = pattern.trim_end_matches('/');
            if !segment.is_empty()
                && path
                    .components()
                    .any(|c| c.as_os_str().to_string_lossy() == segment)
            {
                return true;
            }
        }

        false
    }

    /// Whether a file name passes the include/exclude name patterns
    pub fn matches_name(&self, file_name: &str) -> bool {
        let included = self.name_patterns.is_empty()
            || self.name_patterns.iter().any(|pattern| {
                glob::Pattern::new(pattern)
                    .map(|p| p.matches(file_name))
                    .unwrap_or(false)
            });

        if !included {
            return false;
        }

        !self.not_name_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(file_name))
                .unwrap_or(false)
        })
    }

    /// One-shot scan of all roots, honoring exclusions and name patterns
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in &self.roots {
            for entry in WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| !(e.file_type().is_dir() && self.is_excluded(e.path())))
                .filter_map(Result::ok)
            {
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if self.matches_name(&name) && !self.is_excluded(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }

        files
    }
}

/// Project root for the default finder, starting from the current directory
pub fn project_root() -> PathBuf {
    let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    project_root_from(&start)
}

/// Walk upward from `start` until a project marker is found
///
/// Lets this crate locate the host project's files when installed as a
/// dependency. Falls back to `start` when no marker exists.
pub fn project_root_from(start: &Path) -> PathBuf {
    let mut current = Some(start);

    while let Some(dir) = current {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
            return dir.to_path_buf();
        }
        current = dir.parent();
    }

    start.to_path_buf()
}
