//! Router configuration for both services.
//!
//! # Resolver
//!
//! - `GET /health`       - Static liveness payload
//! - `GET /{short_code}` - 307 redirect, 404 when unknown, 503 when the store is down
//!
//! # Minter
//!
//! - `GET  /health`  - Static liveness payload
//! - `POST /shorten` - Mint a short code for a long URL
//!
//! Both routers carry the request tracing layer.

use crate::api::handlers::{
    minter_health_handler, redirect_handler, resolver_health_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::{MinterState, ResolverState};
use axum::Router;
use axum::routing::{get, post};

/// Constructs the resolver router.
///
/// `/health` is a static route and takes precedence over the `/{short_code}`
/// capture, so `health` can never resolve as a short code.
pub fn resolver_router(state: ResolverState) -> Router {
    Router::new()
        .route("/health", get(resolver_health_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the minter router.
pub fn minter_router(state: MinterState) -> Router {
    Router::new()
        .route("/health", get(minter_health_handler))
        .route("/shorten", post(shorten_handler))
        .with_state(state)
        .layer(tracing::layer())
}
