//! Tree plugin
//!
//! Scans a directory into a [`TreeDatabase`] of included paths.

mod database;
mod scanner;
mod walker;

pub use database::*;
pub use scanner::*;
pub use walker::*;

use std::path::Path;

use crate::core::DiagramResult;

/// Scan `root` with the given options in one call
pub fn scan_tree(root: &Path, options: ScanOptions) -> DiagramResult<TreeDatabase> {
    TreeScanner::new(options)?.scan(root)
}
