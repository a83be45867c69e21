//! Handler for the link creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a target URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "validity": 30,          // optional, minutes
///   "shortcode": "abc123"    // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/abc123",
///   "expiry": "2026-08-07T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, non-positive validity, or
/// malformed shortcode; 409 Conflict if the shortcode is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .registry
        .create(&payload.url, payload.validity, payload.shortcode)
        .await?;

    tracing::info!(code = %link.code, "short link created");

    Ok(Json(ShortenResponse {
        short_link: state.short_link(&link.code),
        expiry: link.expires_at,
    }))
}
