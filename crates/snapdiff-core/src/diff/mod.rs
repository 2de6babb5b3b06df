//! Recursive structural differ.
//!
//! Compares two matched records and reports the dotted paths at which they
//! diverge.
//!
//! ## Entry point
//!
//! ```
//! use serde_json::json;
//! use snapdiff_core::{diff::diff, IgnoreSet};
//!
//! let paths = diff(
//!     &json!({"a": {"b": 1}}),
//!     &json!({"a": {"b": 2}}),
//!     &IgnoreSet::new(),
//!     "",
//! );
//! assert_eq!(paths, vec!["a.b"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: keys are visited in sorted order, so identical inputs
//!   produce identical path sequences.
//! - **Leaf reporting**: an object-valued field is reported only through its
//!   differing descendants, never by its own path, unless the other side is
//!   not an object.
//! - **Whole-value arrays**: arrays are compared element-for-element in
//!   order; a mismatch reports the array's path, never an index.
//! - **Exact ignores**: an ignored path is neither reported nor descended into.

pub mod equality;
pub mod tree;

pub use equality::values_equal;
pub use tree::diff;
