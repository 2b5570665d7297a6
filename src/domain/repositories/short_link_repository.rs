//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the persistent short link table.
///
/// The resolver only ever calls [`ShortLinkRepository::find_long_url`]; the
/// minter only ever calls [`ShortLinkRepository::create`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// No existence check is made beforehand; a duplicate short code is
    /// rejected by the store's unique constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists,
    /// [`AppError::UpstreamUnavailable`] if the store is unreachable and
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, AppError>;

    /// Looks up the long URL for an exact short code match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(long_url))` if a row exists
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] if the store is unreachable
    /// and [`AppError::Internal`] on other database errors.
    async fn find_long_url(&self, short_code: &str) -> Result<Option<String>, AppError>;
}
