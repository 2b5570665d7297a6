//! Short link entity representing a persisted URL mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to its destination URL.
///
/// Records are created once by the minter and never modified afterwards.
/// `short_code` is unique across the store; uniqueness is enforced by the
/// database constraint, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortLinkRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkRecord {
    /// Creates a new ShortLinkRecord instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub short_code: String,
    pub long_url: String,
}
