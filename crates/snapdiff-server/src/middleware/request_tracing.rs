use crate::http::request_tracing::{extract_request_context, REQUEST_ID_HEADER};
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

pub(crate) async fn request_tracing_middleware(mut request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let ctx = extract_request_context(request.headers());
    let request_id = ctx.request_id.clone();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()).unwrap_or(""),
        method = %method,
        route = %route,
    );
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| {
        let status = response.status().as_u16();
        tracing::info!(status, "HTTP Response Code: {}", status);
    });
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
