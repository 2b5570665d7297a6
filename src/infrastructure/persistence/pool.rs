//! Connection pool construction.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::warn;

use crate::config::Config;

/// Pool sizing, timeouts and startup retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Total connection attempts before giving up.
    pub connect_attempts: usize,
    pub retry_delay: Duration,
}

impl PoolSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_connections: config.db_min_connections,
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_connect_timeout),
            idle_timeout: Duration::from_secs(config.db_idle_timeout),
            max_lifetime: Duration::from_secs(config.db_max_lifetime),
            connect_attempts: config.db_connect_retries,
            retry_delay: Duration::from_millis(config.db_connect_retry_delay_ms),
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Some(self.idle_timeout))
            .max_lifetime(Some(self.max_lifetime))
    }
}

/// Opens the bounded PostgreSQL pool, retrying at a fixed interval while the
/// database is not yet accepting connections.
///
/// # Errors
///
/// Returns the last connection error once all attempts are exhausted.
pub async fn connect_pool(database_url: &str, settings: &PoolSettings) -> Result<PgPool> {
    let retries = settings.connect_attempts.saturating_sub(1);
    let strategy = FixedInterval::new(settings.retry_delay).take(retries);

    let mut attempt = 0usize;
    Retry::start(strategy, || {
        attempt += 1;
        let current = attempt;
        let options = settings.options();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                warn!(
                    "Database not ready (attempt {}/{}): {}",
                    current, settings.connect_attempts, e
                );
            })
        }
    })
    .await
    .context("Failed to connect to database")
}
