//! Branch-depth scoring: a heuristic nesting counter, not cyclomatic
//! complexity.
//!
//! Depth increments at most once per line when any branch keyword matches,
//! and decrements by the net closing-brace excess of a line, floored at
//! zero. It overcounts when several branch keywords share a line with
//! unbalanced braces and undercounts brace-less single-statement bodies.

use crate::config;

/// Maximum branch nesting depth observed across the given lines.
pub fn max_branch_depth(lines: &[&str]) -> usize {
    let mut max_depth = 0;
    let mut current = 0usize;

    for line in lines {
        let opens = line.matches('{').count();
        let closes = line.matches('}').count();

        if config::branch_patterns().iter().any(|p| p.is_match(line)) {
            current += 1;
            max_depth = max_depth.max(current);
        }

        if closes > opens {
            current = current.saturating_sub(closes - opens);
        }
    }

    max_depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_of(src: &str) -> usize {
        let lines: Vec<&str> = src.lines().collect();
        max_branch_depth(&lines)
    }

    #[test]
    fn test_flat_body_has_zero_depth() {
        assert_eq!(depth_of("function f() {\n  return 1;\n}\n"), 0);
    }

    #[test]
    fn test_three_nested_ifs_yield_depth_three() {
        let src = "\
function f(a, b, c) {
  if (a) {
    if (b) {
      if (c) {
        run();
      }
    }
  }
}
";
        assert_eq!(depth_of(src), 3);
    }

    #[test]
    fn test_sequential_branches_do_not_stack() {
        let src = "\
function f(a, b) {
  if (a) {
    one();
  }
  if (b) {
    two();
  }
}
";
        assert_eq!(depth_of(src), 1);
    }

    #[test]
    fn test_one_increment_per_line() {
        // `for` and ternary on the same line still count once
        let src = "\
function f(xs) {
  for (const x of xs) { const y = x ? 1 : 0;
  }
}
";
        assert_eq!(depth_of(src), 1);
    }

    #[test]
    fn test_loops_and_switch_count() {
        let src = "\
function f(xs) {
  for (const x of xs) {
    switch (x) {
      case 1:
        while (spin()) {
          tick();
        }
    }
  }
}
";
        assert_eq!(depth_of(src), 3);
    }

    #[test]
    fn test_depth_floors_at_zero() {
        assert_eq!(depth_of("}\n}\nif (x) {\n}\n"), 1);
    }
}
