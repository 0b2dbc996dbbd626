//! Directory tree scanner
//!
//! Walks a root, filters the entries and numbers what is left in sorted path
//! order. The root itself is always part of the result.

use regex::Regex;
use std::path::{Component, Path};
use tracing::{debug, info, span, trace, Level};

use super::database::TreeDatabase;
use super::walker::{FsWalker, PathWalker, WalkEntry};
use crate::core::{Database, DiagramError, DiagramResult};

/// Path segment names skipped unless default excludes are disabled
pub const DEFAULT_EXCLUDES: [&str; 6] = [".git", "node_modules", "dist", "build", ".next", ".cache"];

/// Default walk depth below the root
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest level walked; the root is depth 0
    pub max_depth: usize,
    /// Keep only paths whose full string matches
    pub include: Option<String>,
    /// Drop paths whose full string matches
    pub exclude: Option<String>,
    pub dirs_only: bool,
    pub files_only: bool,
    /// Apply [`DEFAULT_EXCLUDES`]
    pub default_excludes: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include: None,
            exclude: None,
            dirs_only: false,
            files_only: false,
            default_excludes: true,
        }
    }
}

impl ScanOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn dirs_only(mut self) -> Self {
        self.dirs_only = true;
        self
    }

    pub fn files_only(mut self) -> Self {
        self.files_only = true;
        self
    }

    pub fn without_default_excludes(mut self) -> Self {
        self.default_excludes = false;
        self
    }

    /// Whether any component of `relative` (a path below the scan root) is a
    /// default-excluded name. Always false when defaults are disabled.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.default_excludes
            && relative.components().any(|component| match component {
                Component::Normal(name) => name
                    .to_str()
                    .is_some_and(|name| DEFAULT_EXCLUDES.contains(&name)),
                _ => false,
            })
    }
}

fn compile(pattern: Option<&str>) -> DiagramResult<Option<Regex>> {
    pattern
        .map(|pattern| {
            Regex::new(pattern).map_err(|err| DiagramError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
        })
        .transpose()
}

/// Directory tree scanner
#[derive(Debug)]
pub struct TreeScanner<W: PathWalker = FsWalker> {
    options: ScanOptions,
    include: Option<Regex>,
    exclude: Option<Regex>,
    walker: W,
}

impl TreeScanner<FsWalker> {
    /// Scanner over the real filesystem; fails on an invalid pattern
    pub fn new(options: ScanOptions) -> DiagramResult<Self> {
        Self::with_walker(options, FsWalker::new())
    }
}

impl<W: PathWalker> TreeScanner<W> {
    pub fn with_walker(options: ScanOptions, walker: W) -> DiagramResult<Self> {
        let include = compile(options.include.as_deref())?;
        let exclude = compile(options.exclude.as_deref())?;
        Ok(Self {
            options,
            include,
            exclude,
            walker,
        })
    }

    /// Walk `root` and build the tree
    pub fn scan(&self, root: &Path) -> DiagramResult<TreeDatabase> {
        let scan_span = span!(Level::INFO, "scan_tree", root = %root.display(), max_depth = self.options.max_depth);
        let _enter = scan_span.enter();

        if !root.exists() {
            return Err(DiagramError::MissingInputFile {
                path: root.to_path_buf(),
            });
        }

        let entries = self.walker.walk(root, self.options.max_depth)?;
        let database = self.scan_entries(root, entries);
        info!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Tree scanned"
        );
        Ok(database)
    }

    /// Filter, sort and number already-walked entries
    pub fn scan_entries(&self, root: &Path, mut entries: Vec<WalkEntry>) -> TreeDatabase {
        // Full path string order; parents still precede their children
        entries.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

        let mut database = TreeDatabase::new();
        database.push_path(root, true, root.display().to_string());

        for entry in &entries {
            if entry.path == root || !self.is_included(root, entry) {
                continue;
            }
            if database.id_for_path(&entry.path).is_some() {
                trace!(path = %entry.path.display(), "Duplicate walk entry");
                continue;
            }
            let label = entry_label(entry);
            database.push_path(&entry.path, entry.is_dir, label);
            database.link_parent(&entry.path);
        }

        debug!(
            walked = entries.len(),
            included = database.node_count(),
            "Entries filtered"
        );
        database
    }

    /// Inclusion filter for every path except the root
    pub fn is_included(&self, root: &Path, entry: &WalkEntry) -> bool {
        if self.options.dirs_only && !entry.is_dir {
            return false;
        }
        if self.options.files_only && entry.is_dir {
            return false;
        }

        let relative = entry.path.strip_prefix(root).unwrap_or(&entry.path);
        if relative.components().count() > self.options.max_depth {
            return false;
        }

        let full = entry.path.to_string_lossy();
        if let Some(include) = &self.include {
            if !include.is_match(&full) {
                trace!(path = %full, "Not matched by include pattern");
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(&full) {
                trace!(path = %full, "Matched exclude pattern");
                return false;
            }
        }
        if self.options.is_excluded(relative) {
            trace!(path = %full, "Default exclude");
            return false;
        }
        true
    }
}

fn entry_label(entry: &WalkEntry) -> String {
    let name = entry
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.path.display().to_string());
    if entry.is_dir {
        format!("{}/", name)
    } else {
        name
    }
}
