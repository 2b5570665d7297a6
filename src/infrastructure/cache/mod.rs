//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with these implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation used while Redis is unreachable
//! - [`SwappableCache`] - Handle that swaps [`RedisCache`] in once Redis returns
//!
//! Adapters report failures as [`CacheError`]; deciding what a failure means
//! for a request is left to [`crate::application::services::ResolverService`].

mod null_cache;
mod redis_cache;
mod service;
mod swappable_cache;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CACHE_KEY_PREFIX, CacheError, CacheResult, CacheService, cache_key};
pub use swappable_cache::{SwappableCache, reconnect_in_background};

#[cfg(test)]
pub use service::MockCacheService;
