//! Heuristic import extraction and relative-specifier resolution.
//!
//! Import statements are recognized by a single regex over the file text;
//! dynamic imports and side-effect imports are known false negatives.
//! Resolution probes each allow-listed extension against the joined path,
//! then against `<path>/index`, first hit wins. A specifier that resolves to
//! nothing is dropped, not an error.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::config::{self, TARGET_EXTENSIONS};

/// All relative import/export-from specifiers in `content`, in order of
/// first appearance. Duplicates are preserved.
pub fn extract_import_specifiers(content: &str) -> Vec<String> {
    config::import_pattern()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|s| s.starts_with('.'))
        .collect()
}

/// Resolve a relative specifier against the importing file's directory.
/// Returns the target's path relative to `base_dir`, or `None` when no
/// candidate file exists (or the target escapes the scan root).
pub fn resolve_import(from_file: &Path, specifier: &str, base_dir: &Path) -> Option<String> {
    let dir = from_file.parent()?;
    let joined = normalize(&dir.join(specifier));

    // Extension probing, in priority order
    for ext in TARGET_EXTENSIONS {
        let mut candidate = joined.clone().into_os_string();
        candidate.push(format!(".{ext}"));
        let candidate = PathBuf::from(candidate);
        if candidate.is_file() {
            return relative_to(&candidate, base_dir);
        }
    }

    // Index-file fallback
    for ext in TARGET_EXTENSIONS {
        let candidate = joined.join(format!("index.{ext}"));
        if candidate.is_file() {
            return relative_to(&candidate, base_dir);
        }
    }

    debug!(
        "unresolved import '{}' from {}",
        specifier,
        from_file.display()
    );
    None
}

/// Lexical normalization: fold `.` and pop on `..` without touching the
/// filesystem. The joined path need not exist until an extension is added.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn relative_to(path: &Path, base_dir: &Path) -> Option<String> {
    path.strip_prefix(base_dir)
        .ok()
        .map(|p| p.to_string_lossy().into_owned())
}
