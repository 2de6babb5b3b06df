//! snapdiff Core - structural comparison of record snapshots
//!
//! This crate provides the comparison kernel shared by the HTTP service and
//! the CLI:
//! - Recursive tree differ producing dotted attribute paths
//! - Ignore sets parsed from comma-separated path lists
//! - Record indexing by variant-specific composite keys
//! - One snapshot comparator parameterized by record variant
//! - Result model and a plain-text report renderer
//! - Error and logging facilities

pub mod compare;
pub mod diff;
pub mod errors;
pub mod ignore;
pub mod index;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod variant;

pub use snapdiff_core_types as core_types;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use compare::compare;
pub use diff::diff;
pub use errors::{ExError, ExErrorKind, Result, SnapDiffError};
pub use ignore::IgnoreSet;
pub use index::RecordIndex;
pub use model::{ComparisonResult, Difference};
pub use variant::{Variant, VariantSpec};
