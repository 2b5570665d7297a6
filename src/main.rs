//! Resolver service entry point.
//!
//! Serves `GET /{short_code}` redirects using the cache-aside protocol.
//! See [`shortlink::config`] for environment variables.

use shortlink::state::RESOLVER_SERVICE_NAME;
use shortlink::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init_tracing(&config)?;
    config.print_summary(RESOLVER_SERVICE_NAME);

    server::run_resolver(config).await
}
