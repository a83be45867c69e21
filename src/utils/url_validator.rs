//! Target URL validation.
//!
//! Targets are stored and returned verbatim, so validation never rewrites
//! the input; it only decides whether the string is an acceptable redirect
//! destination.

use url::Url;

/// Errors that can occur during target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that the input is an absolute http(s) URL with a host.
///
/// # Security
///
/// Rejects redirect targets in dangerous schemes like `javascript:`,
/// `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative
/// URLs, [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes, and [`UrlValidationError::MissingHost`] for host-less URLs.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
