//! Plain-text rendering of a comparison result for terminal output.

use crate::model::{ComparisonResult, DifferenceKind};
use std::fmt::Write as _;

/// Render a result as a short human-readable report.
///
/// ```text
/// 2 difference(s)
///   item A1_P1: price
///   item A2_P1: item missing in second snapshot
/// ```
pub fn render_text(result: &ComparisonResult) -> String {
    let mut out = String::new();
    if result.is_empty() {
        out.push_str("No differences\n");
        return out;
    }

    let _ = writeln!(out, "{} difference(s)", result.count);
    for difference in &result.differences {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            difference.id_label,
            difference.key,
            difference.attributes()
        );
    }

    let missing = result.differences.iter().filter(|d| d.is_missing()).count();
    let changed_paths: usize = result
        .differences
        .iter()
        .map(|d| match &d.kind {
            DifferenceKind::Changed { paths } => paths.len(),
            DifferenceKind::Missing { .. } => 0,
        })
        .sum();
    let _ = writeln!(
        out,
        "{} changed path(s), {} record(s) missing in second snapshot",
        changed_paths, missing
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difference;

    #[test]
    fn test_empty_report() {
        assert_eq!(
            render_text(&ComparisonResult::new(Vec::new())),
            "No differences\n"
        );
    }

    #[test]
    fn test_report_lists_each_difference() {
        let result = ComparisonResult::new(vec![
            Difference {
                id_label: "item",
                key: "A1_P1".to_string(),
                kind: DifferenceKind::Changed {
                    paths: vec!["price".to_string(), "tax.rate".to_string()],
                },
            },
            Difference {
                id_label: "item",
                key: "A2_P1".to_string(),
                kind: DifferenceKind::Missing {
                    message: "item missing in second snapshot",
                },
            },
        ]);

        let text = render_text(&result);
        assert_eq!(
            text,
            "2 difference(s)\n  item A1_P1: price, tax.rate\n  item A2_P1: item missing in second snapshot\n2 changed path(s), 1 record(s) missing in second snapshot\n"
        );
    }
}
