//! DTOs for health check endpoint.

use serde::Serialize;

/// Static liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy(service: &'static str) -> Self {
        Self {
            status: "healthy",
            service,
        }
    }
}
