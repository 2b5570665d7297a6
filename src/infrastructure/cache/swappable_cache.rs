//! Cache handle whose backend can be replaced while requests are in flight.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info};

use super::service::{CacheResult, CacheService};

/// Delegates to whichever backend is currently installed.
///
/// The resolver starts on this handle with [`super::NullCache`] when Redis is
/// down at startup; [`reconnect_in_background`] swaps the real cache in once
/// it answers. Each call loads the current backend once, so a swap never
/// splits a single operation across two backends.
pub struct SwappableCache {
    current: ArcSwap<Arc<dyn CacheService>>,
}

impl SwappableCache {
    pub fn new(initial: Arc<dyn CacheService>) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Installs `next` for every subsequent call.
    pub fn replace(&self, next: Arc<dyn CacheService>) {
        self.current.store(Arc::new(next));
    }

    fn backend(&self) -> Arc<dyn CacheService> {
        let current = self.current.load();
        Arc::clone(&**current)
    }
}

#[async_trait]
impl CacheService for SwappableCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        self.backend().get_url(short_code).await
    }

    async fn set_url(&self, short_code: &str, long_url: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.backend().set_url(short_code, long_url, ttl_seconds).await
    }
}

/// Retries `connect` every `interval` until it succeeds, then installs the
/// new backend into `handle`.
///
/// The returned task finishes after the swap. Abort it to stop retrying.
pub fn reconnect_in_background<F, Fut>(
    handle: Arc<SwappableCache>,
    interval: Duration,
    mut connect: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = CacheResult<Arc<dyn CacheService>>> + Send + 'static,
{
    tokio::spawn(async move {
        let mut attempt = 0usize;
        let outcome = Retry::start(FixedInterval::new(interval), || {
            attempt += 1;
            let current = attempt;
            let pending = connect();
            async move {
                pending.await.inspect_err(|e| {
                    debug!("Cache still unreachable (reconnect attempt {}): {}", current, e);
                })
            }
        })
        .await;

        if let Ok(cache) = outcome {
            handle.replace(cache);
            info!("Cache reachable again, caching re-enabled");
        }
    })
}
