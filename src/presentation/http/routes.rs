// src/presentation/http/routes.rs
use crate::presentation::http::{
    endpoints::{EndpointError, EndpointRegistry},
    error::HttpError,
    middleware::request_context,
    openapi::{self, StatusResponse},
    state::HttpState,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use std::{any::Any, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Full application router for the discovered endpoints.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Result<Router, EndpointError> {
    let registry = EndpointRegistry::discover()?;
    Ok(build_router_with(state, &registry, allowed_origins))
}

pub fn build_router_with(
    state: HttpState,
    registry: &EndpointRegistry,
    allowed_origins: &[String],
) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health));

    registry
        .bind(router)
        .layer(middleware::from_fn(request_context))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(AnyOrigin)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AnyOrigin)
        .max_age(Duration::from_secs(3600))
}

#[allow(clippy::needless_pass_by_value)]
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    HttpError::internal().into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
