//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::registry::LinkSummary;

/// Listing summary for a single link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummaryItem {
    pub shortcode: String,
    pub original_url: String,
    pub expiry: DateTime<Utc>,
    pub clicks: usize,
}

impl From<LinkSummary> for LinkSummaryItem {
    fn from(summary: LinkSummary) -> Self {
        Self {
            shortcode: summary.code,
            original_url: summary.target_url,
            expiry: summary.expires_at,
            clicks: summary.click_count,
        }
    }
}
