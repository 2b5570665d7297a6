//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService, cache_key};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

/// Redis cache implementation for fast URL lookups.
///
/// Wraps a single multiplexed `ConnectionManager` shared by all requests;
/// cloning it is cheap and it reconnects on its own after connection loss.
/// Command failures are returned to the caller as [`CacheError`].
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }

    /// Like [`RedisCache::connect`], bounded by `connect_timeout` per attempt
    /// and retried at a fixed `delay` for up to `attempts` attempts.
    ///
    /// # Errors
    ///
    /// Returns the last connection error once all attempts are exhausted.
    pub async fn connect_with_retry(
        redis_url: &str,
        attempts: usize,
        delay: Duration,
        connect_timeout: Duration,
    ) -> CacheResult<Self> {
        let strategy = FixedInterval::new(delay).take(attempts.saturating_sub(1));

        let mut attempt = 0usize;
        Retry::start(strategy, || {
            attempt += 1;
            let current = attempt;
            async move {
                tokio::time::timeout(connect_timeout, Self::connect(redis_url))
                    .await
                    .map_err(|_| CacheError::Timeout(connect_timeout))
                    .and_then(|connected| connected)
                    .inspect_err(|e| {
                        warn!("Cache not ready (attempt {}/{}): {}", current, attempts, e);
                    })
            }
        })
        .await
    }
}

fn map_redis_error(e: redis::RedisError) -> CacheError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
    {
        CacheError::ConnectionError(e.to_string())
    } else {
        CacheError::OperationError(e.to_string())
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let key = cache_key(short_code);
        let mut conn = self.client.clone();

        let cached = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(map_redis_error)?;

        match &cached {
            Some(url) => debug!("Cache HIT: {} -> {}", short_code, url),
            None => debug!("Cache MISS: {}", short_code),
        }

        Ok(cached)
    }

    async fn set_url(&self, short_code: &str, long_url: &str, ttl_seconds: u64) -> CacheResult<()> {
        let key = cache_key(short_code);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, long_url, ttl_seconds)
            .await
            .map_err(map_redis_error)?;

        debug!(
            "Cache SET: {} -> {} (TTL: {}s)",
            short_code, long_url, ttl_seconds
        );

        Ok(())
    }
}
