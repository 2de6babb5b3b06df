//! Record variants and their keying configuration.
//!
//! All record shapes share one comparison algorithm. A variant only decides
//! how a record is keyed and how its differences are labelled, so each one
//! is a [`VariantSpec`] value rather than a separate code path.

use crate::errors::{Result, SnapDiffError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Keying and labelling configuration for one record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    /// Endpoint suffix and persisted-result file prefix
    pub name: &'static str,
    /// Dotted paths of the identifier fields, in key order
    pub key_fields: &'static [&'static str],
    /// Joins multiple identifier values into one composite key
    pub key_separator: &'static str,
    /// Name of the key field in each reported difference
    pub id_label: &'static str,
    /// `attributes` text for a record absent from the second snapshot
    pub missing_message: &'static str,
}

pub const ITEM_ATTRIBUTES: VariantSpec = VariantSpec {
    name: "item-attributes",
    key_fields: &["itemId.itemCode"],
    key_separator: "_",
    id_label: "item",
    missing_message: "item missing in second snapshot",
};

pub const ITEM_PRICES: VariantSpec = VariantSpec {
    name: "item-prices",
    key_fields: &["priceId.itemCode", "priceId.priceCode"],
    key_separator: "_",
    id_label: "item",
    missing_message: "item missing in second snapshot",
};

pub const LINK_GROUPS: VariantSpec = VariantSpec {
    name: "link-groups",
    key_fields: &["linkGroupId.linkGroupCode"],
    key_separator: "_",
    id_label: "linkGroupCode",
    missing_message: "linkGroupCode missing in second snapshot",
};

pub const GROUPS: VariantSpec = VariantSpec {
    name: "groups",
    key_fields: &["groupId.groupCode"],
    key_separator: "_",
    id_label: "groupCode",
    missing_message: "GroupCode missing in second snapshot",
};

/// Supported record shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ItemAttributes,
    ItemPrices,
    LinkGroups,
    Groups,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::ItemAttributes,
        Variant::ItemPrices,
        Variant::LinkGroups,
        Variant::Groups,
    ];

    pub fn spec(&self) -> &'static VariantSpec {
        match self {
            Variant::ItemAttributes => &ITEM_ATTRIBUTES,
            Variant::ItemPrices => &ITEM_PRICES,
            Variant::LinkGroups => &LINK_GROUPS,
            Variant::Groups => &GROUPS,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

impl FromStr for Variant {
    type Err = SnapDiffError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| SnapDiffError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl VariantSpec {
    /// Build the composite key for the record at `position` in its snapshot.
    ///
    /// Identifier values may be strings or numbers; numbers are rendered in
    /// their JSON form.
    ///
    /// # Errors
    ///
    /// - `MalformedRecord`: an identifier field is absent, or is not a
    ///   string or number
    pub fn record_key(&self, record: &Value, position: usize) -> Result<String> {
        let parts = self
            .key_fields
            .iter()
            .map(|field| identifier_part(record, field, position))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(self.key_separator))
    }
}

fn identifier_part(record: &Value, field: &str, position: usize) -> Result<String> {
    let value = field
        .split('.')
        .try_fold(record, |current, segment| current.get(segment))
        .ok_or_else(|| SnapDiffError::MalformedRecord {
            position,
            reason: format!("missing identifier field `{}`", field),
        })?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(SnapDiffError::MalformedRecord {
            position,
            reason: format!(
                "identifier field `{}` must be a string or number, got {}",
                field,
                json_type_name(other)
            ),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_every_endpoint_suffix() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = "prices".parse::<Variant>().unwrap_err();
        assert_eq!(
            err,
            SnapDiffError::UnknownVariant {
                name: "prices".to_string()
            }
        );
    }

    #[test]
    fn test_item_price_key_is_composite() {
        let record = json!({"priceId": {"itemCode": "A1", "priceCode": "P1"}, "price": 3});
        assert_eq!(ITEM_PRICES.record_key(&record, 0).unwrap(), "A1_P1");
    }

    #[test]
    fn test_numeric_identifier_rendered_as_json_number() {
        let record = json!({"groupId": {"groupCode": 42}});
        assert_eq!(GROUPS.record_key(&record, 0).unwrap(), "42");
    }

    #[test]
    fn test_missing_identifier_is_malformed_record() {
        let record = json!({"priceId": {"itemCode": "A1"}});
        let err = ITEM_PRICES.record_key(&record, 7).unwrap_err();
        assert_eq!(
            err,
            SnapDiffError::MalformedRecord {
                position: 7,
                reason: "missing identifier field `priceId.priceCode`".to_string()
            }
        );
    }

    #[test]
    fn test_object_identifier_is_malformed_record() {
        let record = json!({"linkGroupId": {"linkGroupCode": {"nested": true}}});
        let err = LINK_GROUPS.record_key(&record, 0).unwrap_err();
        assert!(matches!(err, SnapDiffError::MalformedRecord { .. }));
    }

    #[test]
    fn test_labels_per_variant() {
        assert_eq!(Variant::ItemAttributes.spec().id_label, "item");
        assert_eq!(Variant::ItemPrices.spec().id_label, "item");
        assert_eq!(Variant::LinkGroups.spec().id_label, "linkGroupCode");
        assert_eq!(Variant::Groups.spec().id_label, "groupCode");
        assert_eq!(
            Variant::Groups.spec().missing_message,
            "GroupCode missing in second snapshot"
        );
    }
}
