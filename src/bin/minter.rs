//! Minter service entry point.
//!
//! Serves `POST /shorten`, writing new mappings to PostgreSQL. Applies the
//! schema migrations on startup.
//!
//! # Usage
//!
//! ```bash
//! LISTEN=0.0.0.0:8001 cargo run --bin shortlink-minter
//!
//! curl -X POST localhost:8001/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"long_url": "https://www.rust-lang.org"}'
//! ```

use shortlink::state::MINTER_SERVICE_NAME;
use shortlink::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init_tracing(&config)?;
    config.print_summary(MINTER_SERVICE_NAME);

    server::run_minter(config).await
}
