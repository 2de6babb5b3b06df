//! Multipart upload extraction.

use axum::body::Bytes;
use axum::extract::Multipart;
use snapdiff_core::errors::SnapDiffError;

pub const FIELD_FIRST: &str = "file1";
pub const FIELD_SECOND: &str = "file2";
pub const FIELD_IGNORED_ATTRIBUTES: &str = "ignored_attributes";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-side file name, or the field name when none was sent
    pub file_name: String,
    pub bytes: Bytes,
}

/// Both snapshot files plus the raw ignore list of one comparison request
#[derive(Debug, Clone)]
pub struct SnapshotUploads {
    pub first: UploadedFile,
    pub second: UploadedFile,
    pub ignored_attributes: String,
}

/// Drain the multipart body into [`SnapshotUploads`]
///
/// Field names are matched case-insensitively and unknown fields are
/// skipped. A repeated field keeps its last value.
///
/// # Errors
///
/// - `MalformedUpload`: the body is not valid multipart or exceeds the limit
/// - `MissingUploads`: `file1` or `file2` was not sent
pub async fn read_uploads(mut multipart: Multipart) -> Result<SnapshotUploads, SnapDiffError> {
    let mut first = None;
    let mut second = None;
    let mut ignored_attributes = String::new();
    let mut received = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_ascii_lowercase();
        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| name.clone());

        match name.as_str() {
            FIELD_FIRST => {
                let bytes = field.bytes().await.map_err(malformed)?;
                first = Some(UploadedFile { file_name, bytes });
            }
            FIELD_SECOND => {
                let bytes = field.bytes().await.map_err(malformed)?;
                second = Some(UploadedFile { file_name, bytes });
            }
            FIELD_IGNORED_ATTRIBUTES => {
                ignored_attributes = field.text().await.map_err(malformed)?;
            }
            _ => {}
        }
        received.push(name);
    }

    match (first, second) {
        (Some(first), Some(second)) => Ok(SnapshotUploads {
            first,
            second,
            ignored_attributes,
        }),
        _ => Err(SnapDiffError::MissingUploads { received }),
    }
}

fn malformed(err: axum::extract::multipart::MultipartError) -> SnapDiffError {
    SnapDiffError::MalformedUpload {
        reason: err.to_string(),
    }
}
