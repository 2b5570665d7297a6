//! Service startup, serving and shutdown.
//!
//! Both services follow the same lifecycle:
//!
//! 1. Open the bounded PostgreSQL pool (retried while the database starts)
//! 2. Prepare service-specific resources (cache handle or schema migrations)
//! 3. Bind and serve until SIGINT/SIGTERM, draining in-flight requests
//! 4. Stop cache reconnection, close the pool and drop the cache handle
//!
//! Step 4 runs whether step 2 or 3 ended normally or with an error.

use crate::application::services::{CachePolicy, MintService, ResolverService};
use crate::config::Config;
use crate::infrastructure::cache::{
    CacheError, CacheService, NullCache, RedisCache, SwappableCache, reconnect_in_background,
};
use crate::infrastructure::persistence::{PgShortLinkRepository, PoolSettings, connect_pool};
use crate::routes::{minter_router, resolver_router};
use crate::state::{MinterState, ResolverState};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Upper bound on a single cache connection attempt.
const CACHE_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the resolver service with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be reached after all retries
/// - The listen address is invalid or cannot be bound
/// - The server fails while running
pub async fn run_resolver(config: Config) -> Result<()> {
    let pool = connect_pool(&config.database_url, &PoolSettings::from_config(&config)).await?;
    info!("Connected to database");

    let (cache, reconnect) = connect_cache(&config).await;

    let result: Result<()> = async {
        let repository = Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone())));
        let resolver = Arc::new(ResolverService::new(
            repository,
            cache,
            CachePolicy::from_config(&config),
        ));

        serve(resolver_router(ResolverState::new(resolver)), &config.listen_addr).await
    }
    .await;

    if let Some(task) = reconnect {
        task.abort();
    }
    release(pool).await;
    result
}

/// Runs the minter service with the given configuration.
///
/// Applies the embedded migrations before accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be reached after all retries
/// - A migration fails
/// - The listen address is invalid or cannot be bound
/// - The server fails while running
pub async fn run_minter(config: Config) -> Result<()> {
    let pool = connect_pool(&config.database_url, &PoolSettings::from_config(&config)).await?;
    info!("Connected to database");

    let result: Result<()> = async {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to apply migrations")?;
        info!("Database schema up to date");

        let repository = Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone())));
        let mint_service = Arc::new(MintService::new(repository));

        serve(minter_router(MinterState::new(mint_service)), &config.listen_addr).await
    }
    .await;

    release(pool).await;
    result
}

/// Connects to the cache, retrying for `CACHE_CONNECT_RETRIES` attempts.
///
/// If Redis is still down, the resolver starts on [`NullCache`] behind a
/// [`SwappableCache`] and keeps reconnecting in the background; the returned
/// task swaps Redis in once it answers.
async fn connect_cache(config: &Config) -> (Arc<dyn CacheService>, Option<JoinHandle<()>>) {
    let interval = config.cache_reconnect_interval();

    match RedisCache::connect_with_retry(
        &config.cache_url,
        config.cache_connect_retries,
        interval,
        CACHE_CONNECT_TIMEOUT,
    )
    .await
    {
        Ok(redis) => {
            info!("Cache enabled (Redis)");
            (Arc::new(redis) as Arc<dyn CacheService>, None)
        }
        Err(e) => {
            warn!("{}. Resolving from the database only until the cache is reachable.", e);
            let handle = Arc::new(SwappableCache::new(Arc::new(NullCache::new())));
            let cache_url = config.cache_url.clone();
            let task = reconnect_in_background(handle.clone(), interval, move || {
                let cache_url = cache_url.clone();
                async move {
                    let redis = tokio::time::timeout(
                        CACHE_CONNECT_TIMEOUT,
                        RedisCache::connect(&cache_url),
                    )
                    .await
                    .map_err(|_| CacheError::Timeout(CACHE_CONNECT_TIMEOUT))??;
                    Ok::<_, CacheError>(Arc::new(redis) as Arc<dyn CacheService>)
                }
            });
            (handle as Arc<dyn CacheService>, Some(task))
        }
    }
}

/// Binds the listener and serves `app` until a shutdown signal arrives.
async fn serve(app: Router, listen_addr: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped accepting requests");
    Ok(())
}

/// Closes the pool once every clone held by the router has been dropped.
async fn release(pool: PgPool) {
    pool.close().await;
    info!("Database pool closed");
}

/// Completes on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
