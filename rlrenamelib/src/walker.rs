//! Source file discovery.
//!
//! Walks a directory tree lazily and yields the files the rewriter should
//! touch: names ending in one of the configured suffixes, outside any
//! directory whose path contains the exclusion marker.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::RenameError;
use crate::Result;

/// Suffixes selected when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".h", ".c"];

/// Directory paths containing this text are skipped by default.
pub const DEFAULT_EXCLUDE_MARKER: &str = "external";

/// Configuration for file selection.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    /// File name suffixes to select, matched case-sensitively
    pub extensions: Vec<String>,
    /// Substring that excludes a directory and everything beneath it
    pub exclude_marker: String,
    /// Extra glob patterns; matching files are not selected
    pub exclude: Vec<Pattern>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_marker: DEFAULT_EXCLUDE_MARKER.to_string(),
            exclude: Vec::new(),
        }
    }
}

impl SourceFilter {
    /// Create a filter selecting `.h` and `.c` outside `external` paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected suffixes.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the directory exclusion marker. An empty marker excludes nothing.
    pub fn exclude_marker(mut self, marker: impl Into<String>) -> Self {
        self.exclude_marker = marker.into();
        self
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| RenameError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Whether a directory and its whole subtree are skipped.
    pub fn skips_dir(&self, path: &Path) -> bool {
        !self.exclude_marker.is_empty()
            && path.to_string_lossy().contains(self.exclude_marker.as_str())
    }

    /// Check if a file path is selected.
    ///
    /// The name must end with one of the suffixes and the full path must
    /// not match any exclude pattern. Directory exclusion is handled by
    /// the walk, not here.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        if !self.extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }
}

/// Lazy, one-shot walk over the selected files under a root.
///
/// A root that is missing, unreadable or not a directory produces an empty
/// walk. Entries that fail to read are skipped. Symlinked directories are
/// not followed. Within a directory, files come before subdirectories and
/// each group is in name order.
pub struct SourceWalk {
    entries: walkdir::IntoIter,
    filter: SourceFilter,
}

impl SourceWalk {
    pub fn new(root: impl AsRef<Path>, filter: SourceFilter) -> Self {
        let entries = WalkDir::new(root.as_ref())
            .follow_links(false)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter();
        Self { entries, filter }
    }
}

impl Iterator for SourceWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.entries.next()? {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.depth() == 0 && !entry.file_type().is_dir() {
                tracing::debug!(root = %entry.path().display(), "root is not a directory");
                return None;
            }

            if entry.file_type().is_dir() {
                if self.filter.skips_dir(entry.path()) {
                    tracing::debug!(dir = %entry.path().display(), "skipping excluded directory");
                    self.entries.skip_current_dir();
                }
                continue;
            }

            let path = entry.path();
            if path.is_file() && self.filter.matches(path) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Start a walk over the files under `root` selected by `filter`.
pub fn walk_sources(root: impl AsRef<Path>, filter: &SourceFilter) -> SourceWalk {
    SourceWalk::new(root, filter.clone())
}
