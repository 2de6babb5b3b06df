//! Persistence of comparison results to timestamped JSON files.

use crate::atomic::atomic_write;
use crate::errors::{persistence_error, Result};
use snapdiff_core::errors::{ExError, SnapDiffError};
use snapdiff_core::{ComparisonResult, Variant};
use std::path::{Path, PathBuf};

/// File name for a result: `<variant>-compare-<unix_ts>.json`
pub fn result_file_name(variant: Variant, unix_ts: i64) -> String {
    format!("{}-compare-{}.json", variant.name(), unix_ts)
}

/// Write `result` as pretty JSON under `dir`, stamped with the current time.
///
/// Two results for the same variant within one second share a name; the
/// later write replaces the earlier file.
///
/// # Errors
///
/// - `Serialization`: the result could not be rendered
/// - `Persistence`: the directory or file could not be written
pub fn save_result(dir: &Path, variant: Variant, result: &ComparisonResult) -> Result<PathBuf> {
    save_result_at(dir, variant, result, chrono::Utc::now().timestamp())
}

/// [`save_result`] with an explicit timestamp
pub fn save_result_at(
    dir: &Path,
    variant: Variant,
    result: &ComparisonResult,
    unix_ts: i64,
) -> Result<PathBuf> {
    let path = dir.join(result_file_name(variant, unix_ts));
    let body = serde_json::to_vec_pretty(result)
        .map_err(|e| ExError::from(SnapDiffError::from(e)).with_op("save_result"))?;

    atomic_write(&path, &body).map_err(|e| persistence_error(&path.display().to_string(), e))?;

    tracing::debug!(path = %path.display(), "Comparison result saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use snapdiff_core::model::{Difference, DifferenceKind};
    use tempfile::TempDir;

    fn sample_result() -> ComparisonResult {
        ComparisonResult::new(vec![Difference {
            id_label: "linkGroupCode",
            key: "LG1".to_string(),
            kind: DifferenceKind::Changed {
                paths: vec!["name".to_string()],
            },
        }])
    }

    #[test]
    fn test_file_name_encodes_variant_and_timestamp() {
        assert_eq!(
            result_file_name(Variant::ItemPrices, 1_760_000_000),
            "item-prices-compare-1760000000.json"
        );
        assert_eq!(
            result_file_name(Variant::LinkGroups, 5),
            "link-groups-compare-5.json"
        );
    }

    #[test]
    fn test_save_result_round_trips_wire_shape() {
        let dir = TempDir::new().unwrap();
        let path = save_result_at(dir.path(), Variant::LinkGroups, &sample_result(), 42).unwrap();

        assert_eq!(path, dir.path().join("link-groups-compare-42.json"));
        let stored: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            stored,
            json!({"count": 1, "differences": [{"linkGroupCode": "LG1", "attributes": "name"}]})
        );
    }

    #[test]
    fn test_save_result_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("results").join("today");
        let path = save_result(&nested, Variant::Groups, &sample_result()).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
