//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves detailed statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// Available regardless of expiry: expired links still report their full
/// click history.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.registry.stats(&code).await?;

    Ok(Json(StatsResponse {
        original_url: stats.link.target_url,
        created_at: stats.link.created_at,
        expiry: stats.link.expires_at,
        clicks: stats.clicks.len(),
        click_details: stats.clicks.into_iter().map(ClickInfo::from).collect(),
    }))
}
