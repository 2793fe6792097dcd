//! cogcheck - heuristic static analysis for curly-brace codebases
//!
//! Three independent analyses over a source tree:
//! - complexity scoring of function-like constructs (lines, params, nesting)
//! - circular import detection via DFS over a heuristic dependency graph
//! - type escape-hatch detection (`any`, `@ts-ignore`, ...)
//!
//! No AST is built; everything works on raw text with brace balancing and
//! pattern matching. Best-effort by design.

pub mod cli;
pub mod complexity;
pub mod config;
pub mod deps;
pub mod discovery;
pub mod escapes;
pub mod models;
pub mod reporters;
