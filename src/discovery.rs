//! File discovery: recursive walk with a fixed directory deny-list and
//! extension allow-list.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::SKIP_DIRS;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {0}")]
    RootNotFound(PathBuf),
}

/// Validate and canonicalize the scan root. A missing root is the one fatal
/// input error in the tool.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(ScanError::RootNotFound(path.to_path_buf()).into());
    }
    Ok(std::fs::canonicalize(path)?)
}

/// Collect all regular files under `root` whose extension is in
/// `extensions`, skipping any subtree rooted at a deny-listed directory
/// name. Entries are sorted by path so output order is deterministic for a
/// fixed filesystem state.
pub fn discover_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            // The root itself is always walked, even if its name matches
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !SKIP_DIRS.contains(&name.as_ref())
        });

    for entry in builder.build().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if extensions.contains(&ext) {
                files.push(path.to_path_buf());
            }
        }
    }

    debug!("discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

/// A file's path relative to the scan root, as a string key in the
/// platform's separator convention.
pub fn relative_key(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().into_owned())
}
