//! Correlation ids carried on inbound requests.

use axum::http::HeaderMap;
use snapdiff_core_types::{RequestContext, RequestId, TraceId};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const TRACE_ID_HEADER: &str = "x-trace-id";

const MAX_ID_LEN: usize = 128;

/// Build the request context, honoring caller-supplied ids when they are sane
pub fn extract_request_context(headers: &HeaderMap) -> RequestContext {
    let request_id = header_id(headers, REQUEST_ID_HEADER)
        .map(RequestId::from_string)
        .unwrap_or_default();
    let ctx = RequestContext::with_request_id(request_id);
    match header_id(headers, TRACE_ID_HEADER) {
        Some(trace_id) => ctx.with_trace_id(TraceId::from_string(trace_id)),
        None => ctx,
    }
}

fn header_id(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(name)?.to_str().ok()?.trim();
    let valid = !raw.is_empty()
        && raw.len() <= MAX_ID_LEN
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    valid.then(|| raw.to_string())
}
