//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The target URL to shorten.
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Optional time-to-live in minutes (default: 30).
    pub validity: Option<i64>,

    /// Optional custom short code.
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    /// Fully-qualified short link, `<base>/<code>`.
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
