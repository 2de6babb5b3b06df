//! Path-producing tree walk.

use crate::diff::equality::values_equal;
use crate::ignore::IgnoreSet;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Compare two values and return the dotted paths at which they differ.
///
/// `prefix` is the path of `value1`/`value2` within the enclosing record;
/// the root call passes `""`. When both values are objects the result lists
/// differing leaf paths below `prefix`. Otherwise the two values are
/// compared whole and, if unequal, `prefix` itself is the only path.
///
/// An empty result means the values are equivalent under `ignore`.
pub fn diff(value1: &Value, value2: &Value, ignore: &IgnoreSet, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    match (value1, value2) {
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b, ignore, prefix, &mut paths),
        (a, b) => {
            if !values_equal(a, b) {
                paths.push(prefix.to_string());
            }
        }
    }
    paths
}

fn diff_objects(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    ignore: &IgnoreSet,
    prefix: &str,
    paths: &mut Vec<String>,
) {
    let keys: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();

    for key in keys {
        let full_path = join_path(prefix, key);
        if ignore.contains(&full_path) {
            continue;
        }

        // A missing key is its own state: absent never equals present, even null.
        match (a.get(key), b.get(key)) {
            (Some(Value::Object(x)), Some(Value::Object(y))) => {
                diff_objects(x, y, ignore, &full_path, paths);
            }
            (Some(x), Some(y)) => {
                if !values_equal(x, y) {
                    paths.push(full_path);
                }
            }
            _ => paths.push(full_path),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
