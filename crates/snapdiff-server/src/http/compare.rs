//! Snapshot comparison endpoint.

use crate::http::error_response::ApiError;
use crate::http::upload::{read_uploads, SnapshotUploads};
use crate::AppState;
use axum::extract::{Extension, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snapdiff_core::errors::{ExError, ExErrorKind};
use snapdiff_core::{compare, log_op_end, log_op_error, log_op_start};
use snapdiff_core::{ComparisonResult, IgnoreSet, Variant};
use snapdiff_core_types::RequestContext;
use snapdiff_store::{decode_gzip_json, save_result};
use std::path::PathBuf;
use std::time::Instant;

const OP_SNAPSHOT_COMPARE: &str = "snapshot_compare";

/// `POST /api/snapshot-compare/:variant`
pub async fn snapshot_compare_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(variant): Path<String>,
    multipart: Multipart,
) -> Response {
    let started = Instant::now();
    log_op_start!(
        OP_SNAPSHOT_COMPARE,
        variant = %variant,
        request_id = %ctx.request_id
    );

    match run_compare(&state, &variant, multipart).await {
        Ok(result) => {
            log_op_end!(
                OP_SNAPSHOT_COMPARE,
                duration_ms = started.elapsed().as_millis() as u64,
                variant = %variant,
                request_id = %ctx.request_id,
                diff_count = result.count
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            let err = err.with_request_id(ctx.request_id.clone());
            let api_error = ApiError::from(&err);
            log_op_error!(
                OP_SNAPSHOT_COMPARE,
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                variant = %variant,
                request_id = %ctx.request_id
            );
            api_error.into_response()
        }
    }
}

async fn run_compare(
    state: &AppState,
    variant: &str,
    multipart: Multipart,
) -> Result<ComparisonResult, ExError> {
    let variant: Variant = variant.parse()?;
    let uploads = read_uploads(multipart).await?;
    tracing::info!(
        "Received files: {}, {}",
        uploads.first.file_name,
        uploads.second.file_name
    );

    let persist_dir = state
        .config
        .log_results
        .then(|| state.config.results_dir.clone());
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        span.in_scope(|| compare_uploads(variant, &uploads, persist_dir))
    })
    .await
    .map_err(|e| {
        ExError::new(ExErrorKind::Internal)
            .with_op(OP_SNAPSHOT_COMPARE)
            .with_message(format!("comparison task failed: {}", e))
    })?
}

/// Decode, compare and optionally persist; runs on the blocking pool
fn compare_uploads(
    variant: Variant,
    uploads: &SnapshotUploads,
    persist_dir: Option<PathBuf>,
) -> Result<ComparisonResult, ExError> {
    let first = decode_gzip_json(&uploads.first.file_name, &uploads.first.bytes)?;
    let second = decode_gzip_json(&uploads.second.file_name, &uploads.second.bytes)?;
    let ignore = IgnoreSet::parse(&uploads.ignored_attributes);

    let result = compare(&first, &second, &ignore, variant)?;
    if let Some(dir) = persist_dir {
        let path = save_result(&dir, variant, &result)?;
        tracing::info!(path = %path.display(), "Comparison result persisted");
    }
    Ok(result)
}
