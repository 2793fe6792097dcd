//! JSON reporter
//!
//! Pretty-printed machine-readable reports, suitable for piping to jq.

use anyhow::Result;
use serde::Serialize;

/// Render any report as pretty-printed JSON
pub fn render<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CycleReport;

    #[test]
    fn test_render_valid_json() {
        let report = CycleReport::from_cycles(vec![vec![
            "a.ts".into(),
            "b.ts".into(),
            "a.ts".into(),
        ]]);
        let rendered = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("parse JSON");
        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["cycles"][0][0], "a.ts");
    }
}
