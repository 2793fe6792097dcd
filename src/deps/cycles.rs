//! Cycle detection: depth-first traversal that reports one cycle per
//! back-edge.
//!
//! Unlike an SCC pass, this enumerates each back-edge closure as its own
//! cycle, so the same simple cycle reached through different edges appears
//! more than once. No rotation dedup is applied; consumers that want
//! canonical cycles can normalize themselves.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::deps::graph::DependencyGraph;

/// All traversal state, owned by the caller for one run. Nothing is shared
/// across runs.
#[derive(Default)]
struct TraversalContext {
    visited: FxHashSet<String>,
    on_stack: FxHashSet<String>,
    path: Vec<String>,
    cycles: Vec<Vec<String>>,
}

/// Enumerate every back-edge in the graph as a cycle: the active-path slice
/// from the repeated node through the current node, with the repeated node
/// appended to close the loop. A self-import yields `[node, node]`.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let mut ctx = TraversalContext::default();

    for node in graph.keys() {
        if !ctx.visited.contains(node) {
            dfs(graph, node, &mut ctx);
        }
    }

    if ctx.cycles.is_empty() {
        debug!("no cycles in {} nodes", graph.len());
    } else {
        info!("found {} cycle(s) in {} nodes", ctx.cycles.len(), graph.len());
    }
    ctx.cycles
}

fn dfs(graph: &DependencyGraph, node: &str, ctx: &mut TraversalContext) {
    ctx.visited.insert(node.to_string());
    ctx.on_stack.insert(node.to_string());
    ctx.path.push(node.to_string());

    for neighbor in graph.imports_of(node) {
        if !ctx.visited.contains(neighbor) {
            dfs(graph, neighbor, ctx);
        } else if ctx.on_stack.contains(neighbor) {
            // Back-edge: close the loop from the neighbor's first occurrence
            let start = ctx
                .path
                .iter()
                .position(|n| n == neighbor)
                .unwrap_or(0);
            let mut cycle = ctx.path[start..].to_vec();
            cycle.push(neighbor.clone());
            ctx.cycles.push(cycle);
        }
    }

    ctx.path.pop();
    ctx.on_stack.remove(node);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let mut graph = DependencyGraph::default();
        for (key, imports) in entries {
            graph.insert(
                key.to_string(),
                imports.iter().map(|s| s.to_string()).collect(),
            );
        }
        graph
    }

    #[test]
    fn test_acyclic_graph_has_no_cycles() {
        let graph = graph_of(&[
            ("a.ts", &["b.ts", "c.ts"]),
            ("b.ts", &["c.ts"]),
            ("c.ts", &[]),
        ]);
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn test_triangle_reports_single_rotation() {
        let graph = graph_of(&[
            ("a.ts", &["b.ts"]),
            ("b.ts", &["c.ts"]),
            ("c.ts", &["a.ts"]),
        ]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles, vec![vec!["a.ts", "b.ts", "c.ts", "a.ts"]]);
    }

    #[test]
    fn test_self_import_is_two_element_cycle() {
        let graph = graph_of(&[("a.ts", &["a.ts"])]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles, vec![vec!["a.ts", "a.ts"]]);
    }

    #[test]
    fn test_two_back_edges_report_two_cycles() {
        // b -> a and c -> a are both back-edges from one DFS path
        let graph = graph_of(&[
            ("a.ts", &["b.ts"]),
            ("b.ts", &["a.ts", "c.ts"]),
            ("c.ts", &["a.ts"]),
        ]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0], vec!["a.ts", "b.ts", "a.ts"]);
        assert_eq!(cycles[1], vec!["a.ts", "b.ts", "c.ts", "a.ts"]);
    }

    #[test]
    fn test_dangling_reference_is_traversed_as_leaf() {
        let graph = graph_of(&[("a.ts", &["missing.ts"]), ("b.ts", &["a.ts"])]);
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn test_two_file_cycle_end_to_end_shape() {
        let graph = graph_of(&[("a.ts", &["b.ts"]), ("b.ts", &["a.ts"])]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles, vec![vec!["a.ts", "b.ts", "a.ts"]]);
    }

    #[test]
    fn test_disconnected_components_both_searched() {
        let graph = graph_of(&[
            ("a.ts", &["b.ts"]),
            ("b.ts", &[]),
            ("x.ts", &["y.ts"]),
            ("y.ts", &["x.ts"]),
        ]);
        let cycles = find_cycles(&graph);
        assert_eq!(cycles, vec![vec!["x.ts", "y.ts", "x.ts"]]);
    }
}
