//! Dependency graph construction.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::deps::imports::{extract_import_specifiers, resolve_import};
use crate::discovery::relative_key;

/// Adjacency from file key (path relative to the scan root) to its resolved
/// relative imports. Key iteration follows insertion order so traversal and
/// reporting stay deterministic.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    keys: Vec<String>,
    edges: FxHashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn insert(&mut self, key: String, imports: Vec<String>) {
        if !self.edges.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.edges.insert(key, imports);
    }

    /// Keys in insertion order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Direct imports of a node. A dangling reference (value that is not a
    /// key) traverses as zero-outdegree.
    pub fn imports_of(&self, key: &str) -> &[String] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Build the graph from the discovered file set. Unreadable files are
/// skipped with a warning rather than aborting the scan.
pub fn build_graph(files: &[PathBuf], base_dir: &Path) -> DependencyGraph {
    let mut graph = DependencyGraph::default();

    for file in files {
        let Some(key) = relative_key(file, base_dir) else {
            continue;
        };
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                warn!("skipping unreadable file {}: {}", file.display(), err);
                continue;
            }
        };
        let imports: Vec<String> = extract_import_specifiers(&content)
            .iter()
            .filter_map(|specifier| resolve_import(file, specifier, base_dir))
            .collect();
        graph.insert(key, imports);
    }

    debug!("dependency graph has {} nodes", graph.len());
    graph
}
