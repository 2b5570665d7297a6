//! PostgreSQL persistence.
//!
//! - [`pool`] - Bounded connection pool construction with startup retries
//! - [`PgShortLinkRepository`] - Short link storage and lookup

pub mod pg_short_link_repository;
pub mod pool;

pub use pg_short_link_repository::PgShortLinkRepository;
pub use pool::{PoolSettings, connect_pool};
