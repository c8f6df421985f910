// src/presentation/http/middleware/request_context.rs
use crate::{
    application::mediator::{Cancellation, RequestContext},
    presentation::http::state::HttpState,
};
use axum::{
    extract::{Extension, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Installs a [`RequestContext`] for the request: the caller's
/// `x-request-id` when it is a uuid (a fresh one otherwise) and a
/// cancellation that fires after the configured request timeout.
pub async fn request_context(
    Extension(state): Extension<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4);

    // held until the response is produced
    let (_cancel, cancellation) = Cancellation::with_timeout(state.request_timeout);
    req.extensions_mut()
        .insert(RequestContext::new(request_id, cancellation));

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    tracing::info!(%request_id, %method, %path, "request started");
    let started = Instant::now();

    let mut response = next.run(req).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        %request_id,
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms,
        "request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
