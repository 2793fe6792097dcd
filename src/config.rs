//! Compile-time configuration: allow-lists, deny-lists, limits, and the
//! heuristic pattern sets.
//!
//! Everything here is fixed at build time. There is deliberately no config
//! file layer: the tool is meant to apply one uniform standard wherever it
//! runs.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Severity;

/// Extensions analyzed by the complexity and dependency pipelines, in
/// import-resolution priority order.
pub const TARGET_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// Extensions scanned by the escape-hatch detector (typed sources only).
pub const ESCAPE_EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Directory names whose subtrees are never walked.
pub const SKIP_DIRS: [&str; 4] = ["node_modules", ".git", "dist", "build"];

/// Per-function complexity limits, applied uniformly to every record.
#[derive(Debug, Clone, Copy)]
pub struct ComplexityLimits {
    pub max_lines: usize,
    pub max_params: usize,
    pub max_depth: usize,
}

pub const LIMITS: ComplexityLimits = ComplexityLimits {
    max_lines: 30,
    max_params: 3,
    max_depth: 3,
};

static IMPORT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Import-or-export-from statement pattern. Captures the specifier string.
///
/// Known false negatives: dynamic `import()`, side-effect imports without
/// `from`, and multi-line re-export forms. Heuristic by design.
pub fn import_pattern() -> &'static Regex {
    IMPORT_PATTERN.get_or_init(|| {
        Regex::new(r#"(?:import|export).*from\s+['"]([^'"]+)['"]"#)
            .expect("import pattern is valid")
    })
}

static FUNCTION_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Function-start patterns, tested in order; first match wins per line.
///
/// Capture group 1 is the construct name, group 2 the raw parameter
/// substring (for the bare-parameter arrow form, group 2 is the single
/// parameter itself).
pub fn function_patterns() -> &'static Vec<Regex> {
    FUNCTION_PATTERNS.get_or_init(|| {
        [
            // named function declaration
            r"^(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\(([^)]*)\)",
            // arrow function assigned to const, parenthesized params
            r"^(?:export\s+)?const\s+(\w+)\s*=\s*(?:async\s+)?\(([^)]*)\)\s*(?::\s*[^=]+)?\s*=>",
            // arrow function assigned to const, bare single param
            r"^(?:export\s+)?const\s+(\w+)\s*=\s*(?:async\s+)?(\w+)\s*=>",
            // method-style declaration with opening brace
            r"^\s*(?:async\s+)?(\w+)\s*\(([^)]*)\)\s*(?::\s*[^{]+)?\s*\{",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("function pattern is valid"))
        .collect()
    })
}

static BRANCH_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Branch/loop/ternary keyword patterns for the depth counter.
pub fn branch_patterns() -> &'static Vec<Regex> {
    BRANCH_PATTERNS.get_or_init(|| {
        [
            r"\bif\s*\(",
            r"\belse\s+if\s*\(",
            r"\bswitch\s*\(",
            r"\bfor\s*\(",
            r"\bwhile\s*\(",
            r"\?\s*[^:]+\s*:",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("branch pattern is valid"))
        .collect()
    })
}

static GENERIC_GROUP_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Angle-bracket generic groups inside a parameter list, stripped before
/// comma-splitting so `Map<string, number>` counts as one parameter.
pub fn generic_group_pattern() -> &'static Regex {
    GENERIC_GROUP_PATTERN
        .get_or_init(|| Regex::new(r"<[^>]+>").expect("generic pattern is valid"))
}

static DEFAULT_VALUE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Default-value assignments inside a parameter list.
pub fn default_value_pattern() -> &'static Regex {
    DEFAULT_VALUE_PATTERN
        .get_or_init(|| Regex::new(r"=[^,]+").expect("default pattern is valid"))
}

/// One escape-hatch marker pattern with its reporting severity.
pub struct EscapePattern {
    pub name: &'static str,
    pub regex: Regex,
    pub severity: Severity,
}

static ESCAPE_PATTERNS: OnceLock<Vec<EscapePattern>> = OnceLock::new();

/// Type escape-hatch markers: explicit `any` forms are errors, suppression
/// comments and double casts are warnings.
pub fn escape_patterns() -> &'static Vec<EscapePattern> {
    ESCAPE_PATTERNS.get_or_init(|| {
        [
            ("any", r":\s*any\b", Severity::Error),
            ("any[]", r":\s*any\[\]", Severity::Error),
            ("as any", r"as\s+any\b", Severity::Error),
            ("<any>", r"<any>", Severity::Error),
            ("@ts-ignore", r"@ts-ignore", Severity::Warning),
            ("@ts-expect-error", r"@ts-expect-error", Severity::Warning),
            ("as unknown as", r"as\s+unknown\s+as", Severity::Warning),
        ]
        .iter()
        .map(|&(name, pattern, severity)| EscapePattern {
            name,
            regex: Regex::new(pattern).expect("escape pattern is valid"),
            severity,
        })
        .collect()
    })
}
