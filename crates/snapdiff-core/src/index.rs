//! Record indexing by composite key.

use crate::errors::{Result, SnapDiffError};
use crate::variant::VariantSpec;
use serde_json::Value;
use std::collections::HashMap;

/// Name of the top-level array holding a snapshot's records
pub const SNAPSHOT_FIELD: &str = "snapshot";

/// Records of one snapshot keyed by composite key, in first-seen order
///
/// When two records share a key the later record replaces the earlier one
/// but keeps the earlier one's position. Shared keys usually mean the
/// variant's identifier fields do not uniquely identify a record, so each
/// replacement is counted in [`RecordIndex::collisions`].
#[derive(Debug, Default)]
pub struct RecordIndex<'a> {
    entries: Vec<(String, &'a Value)>,
    positions: HashMap<String, usize>,
    collisions: Vec<String>,
}

impl<'a> RecordIndex<'a> {
    /// Index every record of a snapshot document.
    ///
    /// # Errors
    ///
    /// - `MalformedDocument`: the root is not an object, or `snapshot` is
    ///   absent or not an array
    /// - `MalformedRecord`: a record lacks the variant's identifier fields
    pub fn build(document: &'a Value, spec: &VariantSpec) -> Result<Self> {
        let records = snapshot_records(document)?;
        let mut index = RecordIndex {
            entries: Vec::with_capacity(records.len()),
            positions: HashMap::with_capacity(records.len()),
            collisions: Vec::new(),
        };
        for (position, record) in records.iter().enumerate() {
            let key = spec.record_key(record, position)?;
            index.insert(key, record);
        }
        Ok(index)
    }

    fn insert(&mut self, key: String, record: &'a Value) {
        match self.positions.get(&key) {
            Some(&slot) => {
                tracing::warn!(record_key = %key, "duplicate record key, later record wins");
                self.entries[slot].1 = record;
                self.collisions.push(key);
            }
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.positions.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Iterate `(key, record)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that were overwritten by a later record, one entry per overwrite
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }
}

fn snapshot_records(document: &Value) -> Result<&Vec<Value>> {
    let root = document
        .as_object()
        .ok_or_else(|| SnapDiffError::MalformedDocument {
            reason: "document root must be a JSON object".to_string(),
        })?;
    match root.get(SNAPSHOT_FIELD) {
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(SnapDiffError::MalformedDocument {
            reason: format!("`{}` must be an array", SNAPSHOT_FIELD),
        }),
        None => Err(SnapDiffError::MalformedDocument {
            reason: format!("required field `{}` is absent", SNAPSHOT_FIELD),
        }),
    }
}
