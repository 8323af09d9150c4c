//! HTTP-level middleware (cross-cutting concerns).
//!
//! Everything here applies to every route under `/api/v1`, public blog and
//! admin alike. Route-specific behavior belongs in handlers, not here.
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limits (editor submissions carry whole HTML articles)
//! - Global timeout, derived from the backend timeout in `Config`
//!
//! Notes:
//! - A timed-out request answers 408; the backend call itself is bounded by
//!   the reqwest client timeout and surfaces as 502 before this fires.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 2 MiB. Article bodies are HTML and can be long.
const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Whole-request budget for a given backend timeout.
///
/// A handler makes at most two sequential backend calls, plus the list
/// refetch after an admin mutation, so three round trips and one second of slack.
/// Saturates instead of overflowing for absurd inputs.
pub fn request_timeout(backend_timeout: Duration) -> Duration {
    backend_timeout
        .saturating_mul(3)
        .saturating_add(Duration::from_secs(1))
}

/// Apply HTTP-level middleware to the given Router.
///
/// Defaults:
/// - Request-Id header: `x-request-id`
/// - Body limit: 2 MiB
/// - Timeout: caller-supplied, see [`request_timeout`]
pub fn apply(router: Router, timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        // Generate a request id if missing, then propagate it to the response.
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        // Limit request body size.
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        // Bound request time (slow backend plus refetch).
        .layer(TimeoutLayer::new(timeout))
        // Access log / tracing for all requests.
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}
