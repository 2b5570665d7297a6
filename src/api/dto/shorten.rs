//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLinkRecord;

/// Request to mint a short code for a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored verbatim; only emptiness is rejected.
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: String,
}

/// The minted mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub long_url: String,
}

impl From<ShortLinkRecord> for ShortenResponse {
    fn from(record: ShortLinkRecord) -> Self {
        Self {
            short_code: record.short_code,
            long_url: record.long_url,
        }
    }
}
