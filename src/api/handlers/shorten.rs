//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::MinterState;

/// Mints a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://www.rust-lang.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "aZ3k9Q", "long_url": "https://www.rust-lang.org" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is empty.
/// Returns 409 Conflict if the generated code collides with an existing one.
/// Returns 503 Service Unavailable if the database is unreachable.
pub async fn shorten_handler(
    State(state): State<MinterState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.mint_service.shorten(payload.long_url).await?;

    Ok(Json(record.into()))
}
