//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderName, header},
    response::Redirect,
};
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::entities::NewClick;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL, recording one click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Referrer and user agent come from request headers, the remote address
/// from the peer socket; absent values are recorded as empty strings. An
/// expired resolve records nothing.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone for an expired
/// link.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let click = NewClick {
        referrer: header_value(&headers, header::REFERER),
        remote_addr: addr.ip().to_string(),
        user_agent: header_value(&headers, header::USER_AGENT),
    };

    let target_url = state.registry.resolve(&code, click).await?;

    debug!(%code, "redirecting");

    Ok(Redirect::temporary(&target_url))
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
