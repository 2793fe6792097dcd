//! Core data models: function records, cycles, escape issues, and the
//! serialized report shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity of an escape-hatch issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which complexity limits a function exceeds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Violations {
    pub lines: bool,
    pub params: bool,
    pub depth: bool,
}

impl Violations {
    pub fn any(&self) -> bool {
        self.lines || self.params || self.depth
    }
}

/// One detected function-like construct
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    /// Path relative to the scan root
    pub file: String,
    pub name: String,
    /// 1-indexed, inclusive
    pub start_line: usize,
    /// 1-indexed, inclusive
    pub end_line: usize,
    pub lines: usize,
    pub params: usize,
    pub branch_depth: usize,
    pub violations: Violations,
}

/// Violation counts per limit category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViolationCounts {
    pub lines: usize,
    pub params: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityStats {
    pub total_functions: usize,
    pub violations: usize,
    pub by_type: ViolationCounts,
}

/// Complexity report: only violating functions are listed, stats cover all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub functions: Vec<FunctionRecord>,
    pub stats: ComplexityStats,
}

impl ComplexityReport {
    pub fn from_functions(all: Vec<FunctionRecord>) -> Self {
        let total_functions = all.len();
        let functions: Vec<FunctionRecord> =
            all.into_iter().filter(|f| f.violations.any()).collect();

        let by_type = ViolationCounts {
            lines: functions.iter().filter(|f| f.violations.lines).count(),
            params: functions.iter().filter(|f| f.violations.params).count(),
            depth: functions.iter().filter(|f| f.violations.depth).count(),
        };
        let stats = ComplexityStats {
            total_functions,
            violations: functions.len(),
            by_type,
        };

        Self { functions, stats }
    }
}

/// Cycle report: each cycle starts and ends at the repeated node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycles: Vec<Vec<String>>,
    pub count: usize,
}

impl CycleReport {
    pub fn from_cycles(cycles: Vec<Vec<String>>) -> Self {
        let count = cycles.len();
        Self { cycles, count }
    }
}

/// One escape-hatch marker occurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscapeIssue {
    /// Path relative to the scan root
    pub file: String,
    /// 1-indexed
    pub line: usize,
    pub pattern: String,
    pub severity: Severity,
    /// Trimmed source line
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscapeStats {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    /// BTreeMap keeps serialization order stable across runs
    pub by_pattern: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscapeReport {
    pub issues: Vec<EscapeIssue>,
    pub stats: EscapeStats,
}

impl EscapeReport {
    pub fn from_issues(issues: Vec<EscapeIssue>) -> Self {
        let mut stats = EscapeStats {
            total: issues.len(),
            ..Default::default()
        };
        for issue in &issues {
            match issue.severity {
                Severity::Error => stats.errors += 1,
                Severity::Warning => stats.warnings += 1,
            }
            *stats.by_pattern.entry(issue.pattern.clone()).or_insert(0) += 1;
        }
        Self { issues, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: bool, params: bool, depth: bool) -> FunctionRecord {
        FunctionRecord {
            file: "a.ts".into(),
            name: "f".into(),
            start_line: 1,
            end_line: 10,
            lines: 10,
            params: 2,
            branch_depth: 1,
            violations: Violations {
                lines,
                params,
                depth,
            },
        }
    }

    #[test]
    fn test_complexity_report_filters_violations() {
        let report = ComplexityReport::from_functions(vec![
            record(false, false, false),
            record(true, false, false),
            record(true, true, false),
        ]);
        assert_eq!(report.stats.total_functions, 3);
        assert_eq!(report.stats.violations, 2);
        assert_eq!(report.functions.len(), 2);
        assert_eq!(report.stats.by_type.lines, 2);
        assert_eq!(report.stats.by_type.params, 1);
        assert_eq!(report.stats.by_type.depth, 0);
    }

    #[test]
    fn test_function_record_serializes_camel_case() {
        let json = serde_json::to_value(record(false, false, false)).expect("serialize");
        assert!(json.get("startLine").is_some());
        assert!(json.get("endLine").is_some());
        assert!(json.get("branchDepth").is_some());
        assert!(json.get("start_line").is_none());
    }

    #[test]
    fn test_escape_report_stats() {
        let issues = vec![
            EscapeIssue {
                file: "a.ts".into(),
                line: 1,
                pattern: "any".into(),
                severity: Severity::Error,
                content: "const x: any = 1;".into(),
            },
            EscapeIssue {
                file: "a.ts".into(),
                line: 2,
                pattern: "@ts-ignore".into(),
                severity: Severity::Warning,
                content: "// @ts-ignore".into(),
            },
            EscapeIssue {
                file: "b.ts".into(),
                line: 5,
                pattern: "any".into(),
                severity: Severity::Error,
                content: "let y: any;".into(),
            },
        ];
        let report = EscapeReport::from_issues(issues);
        assert_eq!(report.stats.total, 3);
        assert_eq!(report.stats.errors, 2);
        assert_eq!(report.stats.warnings, 1);
        assert_eq!(report.stats.by_pattern.get("any"), Some(&2));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
