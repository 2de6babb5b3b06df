//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write bytes to a file
///
/// Every call writes its own uniquely named temp file and renames it over
/// `target_path`, so concurrent writers of one target never share a temp
/// file and the last rename wins.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    let parent = match target_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| io_error("create_results_dir", e))?;

    // Same directory as the target so the rename stays on one filesystem
    let mut temp =
        NamedTempFile::new_in(parent).map_err(|e| io_error("create_result_temp", e))?;
    temp.write_all(content)
        .map_err(|e| io_error("write_result_temp", e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| io_error("sync_result_temp", e))?;
    temp.persist(target_path)
        .map_err(|e| io_error("rename_result_temp", e.error))?;

    Ok(())
}
