//! Handlers for health check endpoints.
//!
//! Both report a static payload and always answer 200. Neither probes the
//! store or the cache, so a healthy response only means the process is
//! serving HTTP.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::{MinterState, ResolverState};

/// `GET /health` on the resolver.
///
/// ```json
/// { "status": "healthy", "service": "resolver" }
/// ```
pub async fn resolver_health_handler(State(state): State<ResolverState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service_name))
}

/// `GET /health` on the minter.
pub async fn minter_health_handler(State(state): State<MinterState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service_name))
}
