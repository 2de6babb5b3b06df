//! Snapshot comparator tests across all variants.

use serde_json::{json, Value};
use snapdiff_core::errors::{ExError, ExErrorKind, SnapDiffError};
use snapdiff_core::model::DifferenceKind;
use snapdiff_core::{compare, IgnoreSet, Variant};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn price(item: &str, price_code: &str, amount: f64) -> Value {
    json!({
        "priceId": {"itemCode": item, "priceCode": price_code},
        "price": amount,
        "currency": "EUR",
        "validity": {"from": "2026-01-01", "to": null}
    })
}

fn snapshot(records: Vec<Value>) -> Value {
    json!({ "snapshot": records })
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_item_prices_changed_and_missing() {
    let first = snapshot(vec![
        price("A1", "P1", 1.99),
        price("A2", "P1", 5.00),
        price("A3", "P1", 7.50),
    ]);
    let second = snapshot(vec![price("A3", "P1", 7.50), price("A1", "P1", 2.49)]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();

    assert_eq!(result.count, 2);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "count": 2,
            "differences": [
                {"item": "A1_P1", "attributes": "price"},
                {"item": "A2_P1", "attributes": "item missing in second snapshot"}
            ]
        })
    );
}

#[test]
fn test_differences_follow_first_snapshot_order() {
    let first = snapshot(vec![
        price("Z9", "P1", 1.0),
        price("A1", "P1", 1.0),
        price("M5", "P1", 1.0),
    ]);
    let second = snapshot(vec![]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();
    let keys: Vec<&str> = result.differences.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["Z9_P1", "A1_P1", "M5_P1"]);
    assert!(result.differences.iter().all(|d| d.is_missing()));
}

#[test]
fn test_multiple_paths_joined_with_comma_space() {
    let first = snapshot(vec![json!({
        "itemId": {"itemCode": "I1"},
        "description": {"en": "Milk", "nl": "Melk"},
        "status": "ACTIVE",
        "tags": ["dairy"]
    })]);
    let second = snapshot(vec![json!({
        "itemId": {"itemCode": "I1"},
        "description": {"en": "Whole milk", "nl": "Melk"},
        "status": "INACTIVE",
        "tags": ["dairy", "fresh"]
    })]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemAttributes).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(
        result.differences[0].attributes(),
        "description.en, status, tags"
    );
    assert_eq!(
        result.differences[0].kind,
        DifferenceKind::Changed {
            paths: vec![
                "description.en".to_string(),
                "status".to_string(),
                "tags".to_string()
            ]
        }
    );
}

#[test]
fn test_link_groups_labels() {
    let first = snapshot(vec![
        json!({"linkGroupId": {"linkGroupCode": "LG1"}, "name": "Bundle"}),
        json!({"linkGroupId": {"linkGroupCode": "LG2"}, "name": "Other"}),
    ]);
    let second = snapshot(vec![json!({"linkGroupId": {"linkGroupCode": "LG1"}, "name": "Bundle 2"})]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::LinkGroups).unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "count": 2,
            "differences": [
                {"linkGroupCode": "LG1", "attributes": "name"},
                {"linkGroupCode": "LG2", "attributes": "linkGroupCode missing in second snapshot"}
            ]
        })
    );
}

#[test]
fn test_groups_labels() {
    let first = snapshot(vec![json!({"groupId": {"groupCode": "G1"}})]);
    let second = snapshot(vec![]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::Groups).unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "count": 1,
            "differences": [{"groupCode": "G1", "attributes": "GroupCode missing in second snapshot"}]
        })
    );
}

#[test]
fn test_ignore_list_suppresses_record() {
    let first = snapshot(vec![price("A1", "P1", 1.0)]);
    let second = snapshot(vec![price("A1", "P1", 2.0)]);

    let result = compare(
        &first,
        &second,
        &IgnoreSet::parse("price, currency"),
        Variant::ItemPrices,
    )
    .unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_empty_ignore_list_behaves_as_no_ignores() {
    let first = snapshot(vec![price("A1", "P1", 1.0)]);
    let second = snapshot(vec![price("A1", "P1", 2.0)]);

    let parsed = compare(&first, &second, &IgnoreSet::parse(""), Variant::ItemPrices).unwrap();
    let empty = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();

    assert_eq!(parsed, empty);
    assert_eq!(parsed.count, 1);
}

#[test]
fn test_keys_only_in_second_never_reported() {
    let first = snapshot(vec![price("A1", "P1", 1.0)]);
    let second = snapshot(vec![price("A1", "P1", 1.0), price("B7", "P2", 9.0)]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();
    assert!(result.is_empty());

    // Reversing the arguments surfaces the extra record
    let reversed = compare(&second, &first, &IgnoreSet::new(), Variant::ItemPrices).unwrap();
    assert_eq!(reversed.count, 1);
    assert_eq!(reversed.differences[0].key, "B7_P2");
}

#[test]
fn test_duplicate_keys_last_record_wins() {
    let first = snapshot(vec![price("A1", "P1", 1.0), price("A1", "P1", 3.0)]);
    let second = snapshot(vec![price("A1", "P1", 3.0)]);

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_count_matches_differences_length() {
    let first = snapshot((0..25).map(|i| price(&format!("I{}", i), "P", i as f64)).collect());
    let second = snapshot((0..25).step_by(2).map(|i| price(&format!("I{}", i), "P", 0.0)).collect());

    let result = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap();
    assert_eq!(result.count, result.differences.len());
    // I0 matches (0.0 == 0.0); 12 other even items changed; 12 odd items missing
    assert_eq!(result.count, 24);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn test_missing_snapshot_field_is_malformed_document() {
    let first = json!({"items": []});
    let second = snapshot(vec![]);

    let err = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap_err();
    assert!(matches!(err, SnapDiffError::MalformedDocument { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::MalformedDocument);
    assert!(!ex_err.kind().is_client_error());
}

#[test]
fn test_record_without_identifier_is_malformed_record() {
    let first = snapshot(vec![json!({"price": 1})]);
    let second = snapshot(vec![]);

    let err = compare(&first, &second, &IgnoreSet::new(), Variant::ItemPrices).unwrap_err();
    assert_eq!(
        err,
        SnapDiffError::MalformedRecord {
            position: 0,
            reason: "missing identifier field `priceId.itemCode`".to_string()
        }
    );
}
