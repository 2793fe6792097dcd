//! Terminal summary renderer.

use console::style;

use crate::config::ComplexityLimits;
use crate::models::{ComplexityReport, CycleReport, EscapeReport, Severity};

/// Human-readable complexity summary
pub fn render_complexity(report: &ComplexityReport, limits: &ComplexityLimits) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Limits: {} lines, {} params, {} depth\n\n",
        limits.max_lines, limits.max_params, limits.max_depth
    ));

    if report.functions.is_empty() {
        out.push_str(&format!(
            "{} All {} function(s) within complexity limits\n",
            style("✓").green(),
            report.stats.total_functions
        ));
        return out;
    }

    out.push_str(&format!(
        "{} {} of {} function(s) exceed complexity limits:\n\n",
        style("⚠").yellow(),
        style(report.stats.violations).bold(),
        report.stats.total_functions
    ));

    for function in &report.functions {
        let mut issues = Vec::new();
        if function.violations.lines {
            issues.push(format!("{} lines (max {})", function.lines, limits.max_lines));
        }
        if function.violations.params {
            issues.push(format!(
                "{} params (max {})",
                function.params, limits.max_params
            ));
        }
        if function.violations.depth {
            issues.push(format!(
                "depth {} (max {})",
                function.branch_depth, limits.max_depth
            ));
        }
        out.push_str(&format!(
            "  {}:{} - {}\n    {}\n",
            function.file,
            function.start_line,
            style(&function.name).bold(),
            issues.join(", ")
        ));
    }

    out
}

/// Human-readable cycle summary
pub fn render_cycles(report: &CycleReport) -> String {
    let mut out = String::new();

    if report.cycles.is_empty() {
        out.push_str(&format!(
            "{} No circular dependencies found\n",
            style("✓").green()
        ));
        return out;
    }

    out.push_str(&format!(
        "{} Found {} circular dependency chain(s):\n\n",
        style("✗").red(),
        style(report.count).bold()
    ));
    for (index, cycle) in report.cycles.iter().enumerate() {
        out.push_str(&format!("  [{}] {}\n", index + 1, cycle.join(" → ")));
    }

    out
}

/// Human-readable escape-hatch summary, errors before warnings
pub fn render_escapes(report: &EscapeReport) -> String {
    let mut out = String::new();

    if report.issues.is_empty() {
        out.push_str(&format!("{} No type escape hatches found\n", style("✓").green()));
        return out;
    }

    out.push_str(&format!(
        "{} Found {} type escape hatch(es) ({} errors, {} warnings):\n",
        style("✗").red(),
        style(report.stats.total).bold(),
        report.stats.errors,
        report.stats.warnings
    ));

    for severity in [Severity::Error, Severity::Warning] {
        let matching: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect();
        if matching.is_empty() {
            continue;
        }
        out.push_str(&format!("\n  {}:\n", severity));
        for issue in matching {
            out.push_str(&format!(
                "    {}:{} - {}\n",
                issue.file, issue.line, issue.pattern
            ));
        }
    }

    out
}
