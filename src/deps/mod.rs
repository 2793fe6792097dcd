//! Dependency pipeline: import extraction, graph construction, and cycle
//! detection.

mod cycles;
mod graph;
mod imports;

pub use cycles::find_cycles;
pub use graph::{build_graph, DependencyGraph};
pub use imports::{extract_import_specifiers, resolve_import};
