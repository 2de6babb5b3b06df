//! Comparison result types.
//!
//! The serialized shape is the service's wire contract:
//!
//! ```json
//! {"count": 1, "differences": [{"item": "A1_P1", "attributes": "price"}]}
//! ```
//!
//! The name of the key field (`item`, `groupCode`, `linkGroupCode`) depends
//! on the variant, so [`Difference`] serializes by hand.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Aggregated outcome of comparing two snapshots
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ComparisonResult {
    /// Always equal to `differences.len()`
    pub count: usize,
    pub differences: Vec<Difference>,
}

impl ComparisonResult {
    pub fn new(differences: Vec<Difference>) -> Self {
        Self {
            count: differences.len(),
            differences,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }
}

/// One record that differs between the snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Wire name of the key field
    pub id_label: &'static str,
    /// Composite record key
    pub key: String,
    pub kind: DifferenceKind,
}

/// How a record differs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceKind {
    /// Matched in both snapshots, diverging at these dotted paths
    Changed { paths: Vec<String> },
    /// Present only in the first snapshot; carries the variant's marker text
    Missing { message: &'static str },
}

impl Difference {
    /// The `attributes` text: paths joined by `", "`, or the missing marker
    pub fn attributes(&self) -> String {
        match &self.kind {
            DifferenceKind::Changed { paths } => paths.join(", "),
            DifferenceKind::Missing { message } => (*message).to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.kind, DifferenceKind::Missing { .. })
    }
}

impl Serialize for Difference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.id_label, &self.key)?;
        map.serialize_entry("attributes", &self.attributes())?;
        map.end()
    }
}
