//! Business logic services for the application layer.

pub mod mint_service;
pub mod resolver_service;

pub use mint_service::MintService;
pub use resolver_service::{CachePolicy, Resolved, ResolvedFrom, ResolverService};
