//! `cogcheck complexity` - function complexity scoring

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use crate::complexity::extract_functions;
use crate::config::{LIMITS, TARGET_EXTENSIONS};
use crate::discovery::{relative_key, resolve_root};
use crate::models::ComplexityReport;
use crate::reporters::{self, OutputFormat};

pub(super) fn run(path: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let root = resolve_root(path)?;
    let files = super::discover_with_spinner(&root, &TARGET_EXTENSIONS)?;

    let mut all_functions = Vec::new();
    for file in &files {
        let Some(key) = relative_key(file, &root) else {
            continue;
        };
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                warn!("skipping unreadable file {}: {}", file.display(), err);
                continue;
            }
        };
        all_functions.extend(extract_functions(&content, &key, &LIMITS));
    }
    debug!(
        "scored {} functions across {} files",
        all_functions.len(),
        files.len()
    );

    let report = ComplexityReport::from_functions(all_functions);
    let summary = reporters::render_complexity(&report, &LIMITS);
    let json = reporters::render_json(&report)?;
    super::emit(&summary, &json, format, output)
}
