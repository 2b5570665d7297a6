//! Short code resolution using the cache-aside protocol.
//!
//! # Protocol
//!
//! 1. Read `url:<code>` from the cache.
//! 2. On a hit, return the cached URL without consulting the store. Cached
//!    values may be up to one TTL stale.
//! 3. On a miss, look the code up in the persistent store.
//!    - No row: [`AppError::NotFound`]. Nothing is cached for absent codes.
//!    - Row: write the URL back with `SETEX` and return it.
//!
//! # Failure handling
//!
//! Every cache call is bounded by [`CachePolicy::timeout`]. A cache read that
//! fails or times out is treated as a miss; a write-back that fails or times
//! out is logged and dropped. Store errors propagate to the caller.
//!
//! Concurrent misses for the same code each query the store and each write
//! the same value back. No coordination is attempted between them.
//!
//! # Metrics
//!
//! Hits, misses, store lookups and cache errors are emitted through the
//! `metrics` facade. Neither binary installs a recorder, so the counters are
//! inert until an exporter is registered with `metrics::set_global_recorder`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheError, CacheResult, CacheService};

/// Message reported when a short code has no record in the store.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Cache write TTL and per-call timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl_seconds: u64,
    pub timeout: Duration,
}

impl CachePolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            ttl_seconds: config.cache_ttl_seconds,
            timeout: config.cache_timeout(),
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl_seconds: 3600,
            timeout: Duration::from_millis(250),
        }
    }
}

/// Where a resolved URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Cache,
    Store,
}

/// A successfully resolved short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub long_url: String,
    pub source: ResolvedFrom,
}

/// Resolves short codes to long URLs, cache first.
///
/// Holds the process-wide store repository and cache handle; both are
/// constructed at startup and shared by every request.
pub struct ResolverService {
    repository: Arc<dyn ShortLinkRepository>,
    cache: Arc<dyn CacheService>,
    policy: CachePolicy,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        cache: Arc<dyn CacheService>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] only when the store confirms there is
    /// no record. Returns [`AppError::UpstreamUnavailable`] when the store
    /// cannot be reached and [`AppError::Internal`] on other store errors.
    /// Cache failures never produce an error.
    pub async fn resolve(&self, short_code: &str) -> Result<Resolved, AppError> {
        if let Some(long_url) = self.read_cache(short_code).await {
            counter!("shortlink_cache_hits_total").increment(1);
            debug!(short_code, "Resolved from cache");
            return Ok(Resolved {
                long_url,
                source: ResolvedFrom::Cache,
            });
        }
        counter!("shortlink_cache_misses_total").increment(1);

        counter!("shortlink_store_lookups_total").increment(1);
        let long_url = self
            .repository
            .find_long_url(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        self.write_back(short_code, &long_url).await;

        debug!(short_code, "Resolved from store");
        Ok(Resolved {
            long_url,
            source: ResolvedFrom::Store,
        })
    }

    /// Reads the cache, mapping every failure to a miss.
    async fn read_cache(&self, short_code: &str) -> Option<String> {
        match self.bounded(self.cache.get_url(short_code)).await {
            Ok(Some(long_url)) if !long_url.is_empty() => Some(long_url),
            Ok(_) => None,
            Err(e) => {
                counter!("shortlink_cache_errors_total", "op" => "get").increment(1);
                warn!(short_code, "Cache read failed, falling back to store: {}", e);
                None
            }
        }
    }

    /// Best-effort cache population after a store hit.
    async fn write_back(&self, short_code: &str, long_url: &str) {
        let write = self
            .cache
            .set_url(short_code, long_url, self.policy.ttl_seconds);

        if let Err(e) = self.bounded(write).await {
            counter!("shortlink_cache_errors_total", "op" => "set").increment(1);
            warn!(short_code, "Cache write-back failed: {}", e);
        }
    }

    async fn bounded<T>(&self, op: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.policy.timeout, op)
            .await
            .map_err(|_| CacheError::Timeout(self.policy.timeout))?
    }
}
