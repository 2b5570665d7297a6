//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces consumed by the application layer,
//! providing concrete adapters for the persistent store and the cache.
//!
//! # Modules
//!
//! - [`cache`] - Cache abstraction (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL pool setup and repository implementation

pub mod cache;
pub mod persistence;
