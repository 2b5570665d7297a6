//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::ShortLinkRecord`])
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in [`crate::infrastructure`] and
//! consumed by services in [`crate::application::services`].
//!
//! The cache is deliberately absent from this layer: it is a projection of
//! the persistent store owned by the resolver, not a source of truth.

pub mod entities;
pub mod repositories;
