//! Filesystem walk collaborator
//!
//! The scanner only needs `(path, is_dir)` pairs bounded by a depth; the
//! [`PathWalker`] trait keeps the real filesystem swappable in tests.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{DiagramError, DiagramResult};

/// One path yielded by a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }
}

/// Source of filesystem entries below a root, root included
pub trait PathWalker {
    /// Yield entries at most `max_depth` levels below `root` (root = 0).
    /// Order is whatever the walk produces; callers sort.
    fn walk(&self, root: &Path, max_depth: usize) -> DiagramResult<Vec<WalkEntry>>;
}

/// [`PathWalker`] over the real filesystem using `walkdir`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalker;

impl FsWalker {
    pub fn new() -> Self {
        Self
    }
}

impl PathWalker for FsWalker {
    fn walk(&self, root: &Path, max_depth: usize) -> DiagramResult<Vec<WalkEntry>> {
        if !root.exists() {
            return Err(DiagramError::MissingInputFile {
                path: root.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root).max_depth(max_depth) {
            match entry {
                Ok(entry) => entries.push(WalkEntry {
                    path: entry.path().to_path_buf(),
                    is_dir: entry.file_type().is_dir(),
                }),
                Err(err) => warn!(error = %err, "Skipping unreadable entry"),
            }
        }

        debug!(root = %root.display(), entry_count = entries.len(), "Walk finished");
        Ok(entries)
    }
}
