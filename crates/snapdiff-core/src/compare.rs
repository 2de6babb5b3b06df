//! Snapshot comparator.
//!
//! Indexes both snapshot documents by the variant's composite key, diffs
//! every record of the first snapshot against its counterpart in the second,
//! and reports records that are missing from the second snapshot. Records
//! that exist only in the second snapshot are not reported.

use crate::diff::diff;
use crate::errors::Result;
use crate::ignore::IgnoreSet;
use crate::index::RecordIndex;
use crate::model::{ComparisonResult, Difference, DifferenceKind};
use crate::variant::Variant;
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;

const OP_COMPARE: &str = "compare";

/// Compare two parsed snapshot documents.
///
/// `differences` follows the first snapshot's record order.
///
/// # Errors
///
/// - `MalformedDocument`: either document lacks a `snapshot` array
/// - `MalformedRecord`: a record lacks the variant's identifier fields
pub fn compare(
    first: &Value,
    second: &Value,
    ignore: &IgnoreSet,
    variant: Variant,
) -> Result<ComparisonResult> {
    let started = Instant::now();
    log_op_start!(
        OP_COMPARE,
        variant = variant.name(),
        ignored_paths = ignore.len()
    );

    match compare_indexed(first, second, ignore, variant) {
        Ok((result, records_first, records_second)) => {
            log_op_end!(
                OP_COMPARE,
                duration_ms = started.elapsed().as_millis() as u64,
                variant = variant.name(),
                records_first = records_first,
                records_second = records_second,
                diff_count = result.count
            );
            Ok(result)
        }
        Err(err) => {
            log_op_error!(
                OP_COMPARE,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64,
                variant = variant.name()
            );
            Err(err)
        }
    }
}

fn compare_indexed(
    first: &Value,
    second: &Value,
    ignore: &IgnoreSet,
    variant: Variant,
) -> Result<(ComparisonResult, usize, usize)> {
    let spec = variant.spec();
    let index1 = RecordIndex::build(first, spec)?;
    let index2 = RecordIndex::build(second, spec)?;

    let mut differences = Vec::new();
    for (key, record1) in index1.iter() {
        let kind = match index2.get(key) {
            Some(record2) => {
                let paths = diff(record1, record2, ignore, "");
                if paths.is_empty() {
                    continue;
                }
                DifferenceKind::Changed { paths }
            }
            None => DifferenceKind::Missing {
                message: spec.missing_message,
            },
        };
        differences.push(Difference {
            id_label: spec.id_label,
            key: key.to_string(),
            kind,
        });
    }

    Ok((
        ComparisonResult::new(differences),
        index1.len(),
        index2.len(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_documents_have_no_differences() {
        let doc = json!({"snapshot": [
            {"linkGroupId": {"linkGroupCode": "LG1"}, "members": ["a", "b"]}
        ]});
        let result = compare(&doc, &doc, &IgnoreSet::new(), Variant::LinkGroups).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_second_only_records_are_not_reported() {
        let first = json!({"snapshot": []});
        let second = json!({"snapshot": [{"groupId": {"groupCode": "G9"}}]});
        let result = compare(&first, &second, &IgnoreSet::new(), Variant::Groups).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_malformed_second_document_fails_whole_comparison() {
        let first = json!({"snapshot": [{"groupId": {"groupCode": "G1"}}]});
        let second = json!({"records": []});
        assert!(compare(&first, &second, &IgnoreSet::new(), Variant::Groups).is_err());
    }
}
