//! Short code minting service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{SHORT_CODE_LENGTH, generate_code};

/// Service for minting short codes and persisting the mapping.
///
/// Writes go to the persistent store only. The cache is populated lazily by
/// the resolver, so this service holds no cache handle.
pub struct MintService {
    repository: Arc<dyn ShortLinkRepository>,
}

impl MintService {
    /// Creates a new mint service.
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Mints a random short code for `long_url` and stores the mapping.
    ///
    /// The URL is stored verbatim. No lookup is made before the insert, so a
    /// colliding code is reported by the store's unique constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the generated code already exists,
    /// [`AppError::UpstreamUnavailable`] if the store is unreachable.
    pub async fn shorten(&self, long_url: String) -> Result<ShortLinkRecord, AppError> {
        let new_link = NewShortLink {
            short_code: generate_code(SHORT_CODE_LENGTH),
            long_url,
        };

        let record = self.repository.create(new_link).await?;
        info!(short_code = %record.short_code, "Minted short code");

        Ok(record)
    }
}
