//! `cogcheck escapes` - type escape-hatch detection

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use crate::config::ESCAPE_EXTENSIONS;
use crate::discovery::{relative_key, resolve_root};
use crate::escapes::scan_file;
use crate::models::EscapeReport;
use crate::reporters::{self, OutputFormat};

pub(super) fn run(path: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let root = resolve_root(path)?;
    let files = super::discover_with_spinner(&root, &ESCAPE_EXTENSIONS)?;

    let mut issues = Vec::new();
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
        issues.extend(scan_file(&content, &key));
    }

    let report = EscapeReport::from_issues(issues);
    let summary = reporters::render_escapes(&report);
    let json = reporters::render_json(&report)?;
    super::emit(&summary, &json, format, output)
}
