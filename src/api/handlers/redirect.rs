//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::ResolverState;
use crate::utils::location::encode_location;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Check cache for `url:<short_code>`
/// 2. On cache miss (or cache failure), query the database
/// 3. Write the URL back to the cache
/// 4. Return 307 Temporary Redirect
///
/// The redirect is temporary so clients do not pin the target; method and
/// body are preserved. The stored URL is percent-encoded for the header, so
/// targets containing spaces or control characters still redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 503 Service Unavailable if the database is unreachable.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<ResolverState>,
) -> Result<Redirect, AppError> {
    let resolved = state.resolver.resolve(&short_code).await?;

    debug!(
        short_code = %short_code,
        source = ?resolved.source,
        "Redirecting to {}",
        resolved.long_url
    );

    Ok(Redirect::temporary(&encode_location(&resolved.long_url)))
}
