//! Shared application state injected into handlers.
//!
//! Each binary builds its own state once at startup. Services hold the
//! process-wide store pool and cache handle behind `Arc`, so cloning the
//! state per request is cheap.

use std::sync::Arc;

use crate::application::services::{MintService, ResolverService};

/// State of the resolver (read path) service.
#[derive(Clone)]
pub struct ResolverState {
    pub resolver: Arc<ResolverService>,
    pub service_name: &'static str,
}

impl ResolverState {
    pub fn new(resolver: Arc<ResolverService>) -> Self {
        Self {
            resolver,
            service_name: RESOLVER_SERVICE_NAME,
        }
    }
}

/// State of the minter (write path) service.
#[derive(Clone)]
pub struct MinterState {
    pub mint_service: Arc<MintService>,
    pub service_name: &'static str,
}

impl MinterState {
    pub fn new(mint_service: Arc<MintService>) -> Self {
        Self {
            mint_service,
            service_name: MINTER_SERVICE_NAME,
        }
    }
}

/// Identity reported by the resolver's health endpoint.
pub const RESOLVER_SERVICE_NAME: &str = "resolver";

/// Identity reported by the minter's health endpoint.
pub const MINTER_SERVICE_NAME: &str = "minter";
