//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Namespace prefix for every cache key written by the resolver.
pub const CACHE_KEY_PREFIX: &str = "url:";

/// Builds the cache key for a short code (`url:<short_code>`).
pub fn cache_key(short_code: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, short_code)
}

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short URL mappings.
///
/// Implementations must be thread-safe. Unlike the persistent store, the
/// cache is never authoritative for absence: `Ok(None)` means "not cached",
/// not "does not exist".
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached long URL for a short code (`GET url:<code>`).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be reached or the
    /// command fails.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping with an absolute expiry (`SETEX url:<code> <ttl> <url>`).
    ///
    /// Overwrites any existing value; the last writer wins.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend cannot be reached or the
    /// command fails.
    async fn set_url(&self, short_code: &str, long_url: &str, ttl_seconds: u64) -> CacheResult<()>;
}
