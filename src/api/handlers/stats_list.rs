//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats_list::LinkSummaryItem;
use crate::state::AppState;

/// Lists every link ever created, in creation order.
///
/// # Endpoint
///
/// `GET /shorturls`
///
/// Expired links are included; the stats consumer decides how to render
/// them.
pub async fn stats_list_handler(State(state): State<AppState>) -> Json<Vec<LinkSummaryItem>> {
    let items = state
        .registry
        .list()
        .await
        .into_iter()
        .map(LinkSummaryItem::from)
        .collect();

    Json(items)
}
