//! Escape-hatch detection: per-line matching of type-suppression markers.
//!
//! Stateless by design. Comment lines are only checked for the `@ts-`
//! suppression markers, since `any` inside prose is not a type.

use crate::config;
use crate::models::EscapeIssue;

/// Scan one file's text for escape-hatch markers. `file` is the path
/// recorded on each issue.
pub fn scan_file(content: &str, file: &str) -> Vec<EscapeIssue> {
    let mut issues = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        let is_comment = trimmed.starts_with("//") || trimmed.starts_with('*');

        for pattern in config::escape_patterns() {
            if is_comment && !pattern.name.starts_with("@ts-") {
                continue;
            }
            if pattern.regex.is_match(line) {
                issues.push(EscapeIssue {
                    file: file.to_string(),
                    line: idx + 1,
                    pattern: pattern.name.to_string(),
                    severity: pattern.severity,
                    content: trimmed.to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_any_annotation_is_error() {
        let issues = scan_file("const x: any = load();\n", "a.ts");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].pattern, "any");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].line, 1);
    }

    #[test]
    fn test_any_array_matches_both_forms() {
        // `: any[]` satisfies both the `any` and `any[]` patterns
        let issues = scan_file("let xs: any[] = [];\n", "a.ts");
        let patterns: Vec<&str> = issues.iter().map(|i| i.pattern.as_str()).collect();
        assert!(patterns.contains(&"any"));
        assert!(patterns.contains(&"any[]"));
    }

    #[test]
    fn test_suppression_comment_is_warning() {
        let issues = scan_file("// @ts-ignore\nconst x = broken();\n", "a.ts");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].pattern, "@ts-ignore");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_any_inside_comment_is_ignored() {
        let issues = scan_file("// returns: any value works here\n", "a.ts");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_double_cast_is_warning() {
        let issues = scan_file("const n = value as unknown as number;\n", "a.ts");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].pattern, "as unknown as");
    }

    #[test]
    fn test_clean_file_has_no_issues() {
        let issues = scan_file("const x: number = 1;\nexport default x;\n", "a.ts");
        assert!(issues.is_empty());
    }
}
