//! Application layer services implementing business logic.
//!
//! Services consume repository and cache traits and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Cache-aside short code resolution
//! - [`services::mint_service::MintService`] - Short code minting

pub mod services;
