//! `cogcheck cycles` - circular dependency detection

use anyhow::Result;
use std::path::Path;

use crate::config::TARGET_EXTENSIONS;
use crate::deps::{build_graph, find_cycles};
use crate::discovery::resolve_root;
use crate::models::CycleReport;
use crate::reporters::{self, OutputFormat};

pub(super) fn run(path: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let root = resolve_root(path)?;
    let files = super::discover_with_spinner(&root, &TARGET_EXTENSIONS)?;

    let graph = build_graph(&files, &root);
    let report = CycleReport::from_cycles(find_cycles(&graph));

    let summary = reporters::render_cycles(&report);
    let json = reporters::render_json(&report)?;
    super::emit(&summary, &json, format, output)
}
