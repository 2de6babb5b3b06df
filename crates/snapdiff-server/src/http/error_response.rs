//! Public error bodies.
//!
//! Only a fixed message ever reaches the caller; the structured error is
//! logged by the handler before it is converted here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use snapdiff_core::errors::{ExError, ExErrorKind};

pub const MSG_MISSING_FILES: &str = "Exactly two files are required";
pub const MSG_INVALID_ENDPOINT: &str = "Invalid endpoint";
pub const MSG_MALFORMED_UPLOAD: &str = "Malformed multipart request";
pub const MSG_INTERNAL: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl From<&ExError> for ApiError {
    fn from(err: &ExError) -> Self {
        let (status, message) = match err.kind() {
            ExErrorKind::MissingUploads => (StatusCode::BAD_REQUEST, MSG_MISSING_FILES),
            ExErrorKind::UnknownVariant => (StatusCode::BAD_REQUEST, MSG_INVALID_ENDPOINT),
            ExErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, MSG_MALFORMED_UPLOAD),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_kinds_map_to_bad_request() {
        for (kind, message) in [
            (ExErrorKind::MissingUploads, MSG_MISSING_FILES),
            (ExErrorKind::UnknownVariant, MSG_INVALID_ENDPOINT),
            (ExErrorKind::InvalidInput, MSG_MALFORMED_UPLOAD),
        ] {
            let api = ApiError::from(&ExError::new(kind));
            assert_eq!(api.status, StatusCode::BAD_REQUEST);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn test_everything_else_is_opaque_internal_error() {
        for kind in [
            ExErrorKind::Decompression,
            ExErrorKind::Serialization,
            ExErrorKind::MalformedDocument,
            ExErrorKind::MalformedRecord,
            ExErrorKind::Persistence,
            ExErrorKind::Internal,
        ] {
            let err = ExError::new(kind).with_message("secret detail");
            let api = ApiError::from(&err);
            assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api.message, MSG_INTERNAL);
        }
    }
}
