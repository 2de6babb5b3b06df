//! Optional plain-text log file alongside stderr output.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::registry::LookupSpan;

/// Text layer type produced by [`file_layer`]
pub type FileLayer<S> = tracing_subscriber::fmt::Layer<S, DefaultFields, Format, Mutex<File>>;

/// `snapshot_compare_<YYYYmmdd_HHMMSS>.log` for a UTC start time
pub fn log_file_name(started: chrono::DateTime<chrono::Utc>) -> String {
    format!("snapshot_compare_{}.log", started.format("%Y%m%d_%H%M%S"))
}

/// Create `dir` if needed and open a fresh log file in it for appending
///
/// # Errors
///
/// Any I/O error creating the directory or opening the file.
pub fn open_log_file(dir: &Path) -> std::io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name(chrono::Utc::now()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Formatting layer writing uncoloured text lines to `file`
pub fn file_layer<S>(file: File) -> FileLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}
