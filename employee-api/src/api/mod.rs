//! HTTP API
//!
//! - [`employees`]: `/employees` CRUD
//! - [`health`]: `/health`
//!
//! [`build_router`] registers routes only; [`build_app`] adds middleware
//! and state and is shared by the server and in-process tests.

pub mod convert;
pub mod employees;
pub mod extract;
pub mod health;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Uri};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
        .fallback(fallback)
}

/// Build the fully configured application
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    build_router()
        // Trace - one span per request
        .layer(TraceLayer::new_for_http())
        // Request ID - set before tracing sees the request, echoed on the response
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}

async fn fallback(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route");
    AppError::not_found(format!("Route {}", uri.path()))
}
