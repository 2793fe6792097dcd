//! Function boundary extraction via start-pattern matching and running
//! brace balance.
//!
//! This recovers function-like constructs from raw text, not an AST. A line
//! starts at most one construct; after a construct is captured the scan
//! resumes at its end line, so nested declarations inside a body are not
//! recorded separately.

use crate::complexity::depth::max_branch_depth;
use crate::config::{self, ComplexityLimits};
use crate::models::{FunctionRecord, Violations};

/// Extract all function-like constructs from `content`, scoring each
/// against `limits`. `file` is the path recorded on each result.
pub fn extract_functions(
    content: &str,
    file: &str,
    limits: &ComplexityLimits,
) -> Vec<FunctionRecord> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let mut captured_end = None;

        for pattern in config::function_patterns() {
            let Some(caps) = pattern.captures(lines[i]) else {
                continue;
            };
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let raw_params = caps.get(2).map_or("", |m| m.as_str());

            let end = construct_end(&lines, i);
            let body = &lines[i..=end];
            let line_count = body.len();
            let param_count = count_params(raw_params);
            let branch_depth = max_branch_depth(body);

            records.push(FunctionRecord {
                file: file.to_string(),
                name,
                start_line: i + 1,
                end_line: end + 1,
                lines: line_count,
                params: param_count,
                branch_depth,
                violations: Violations {
                    lines: line_count > limits.max_lines,
                    params: param_count > limits.max_params,
                    depth: branch_depth > limits.max_depth,
                },
            });

            captured_end = Some(end);
            break;
        }

        if let Some(end) = captured_end {
            i = end;
        }
        i += 1;
    }

    records
}

/// Find the construct's last line: the first line at or after `start` where
/// the running brace balance returns to zero after at least one `{` has
/// been seen. If the body never opens a brace the construct is its start
/// line; if it opens but never closes, it ends at the last line.
fn construct_end(lines: &[&str], start: usize) -> usize {
    let mut balance: i64 = 0;
    let mut started = false;

    for (j, line) in lines.iter().enumerate().skip(start) {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;

        if opens > 0 {
            started = true;
        }
        balance += opens - closes;

        if started && balance <= 0 {
            return j;
        }
    }

    if started {
        lines.len() - 1
    } else {
        start
    }
}

/// Count parameters in a raw parameter substring: strip generic groups and
/// default-value assignments, then count non-empty comma segments.
pub fn count_params(raw: &str) -> usize {
    if raw.trim().is_empty() {
        return 0;
    }
    let no_generics = config::generic_group_pattern().replace_all(raw, "");
    let no_defaults = config::default_value_pattern().replace_all(&no_generics, "");
    no_defaults
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .count()
}
