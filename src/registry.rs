//! In-memory short link registry.
//!
//! [`LinkRegistry`] owns every mapping for the process lifetime: creation,
//! code uniqueness, expiry enforcement, and click logging. All state sits
//! behind one [`tokio::sync::RwLock`]; `create` and `resolve` take the write
//! guard so the existence check and the mutation are a single atomic step,
//! `stats` and `list` take the read guard. Guards are never held across
//! await points.
//!
//! Entries are never deleted: expiry is a read-time predicate on resolve,
//! and expired links stay visible to `stats` and `list`.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Click, Link, NewClick};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Validity applied when a create request does not specify one, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Upper bound on generation retries before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// A registry entry: the immutable link plus its append-only click list.
#[derive(Debug)]
struct StoredLink {
    link: Link,
    clicks: Vec<Click>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    entries: HashMap<String, StoredLink>,
    /// Codes in creation order, for stable listing.
    order: Vec<String>,
}

/// Full statistics for a single link: metadata plus every recorded click.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Listing summary for a single link.
#[derive(Debug, Clone)]
pub struct LinkSummary {
    pub code: String,
    pub target_url: String,
    pub expires_at: DateTime<Utc>,
    pub click_count: usize,
}

/// The in-memory short code registry.
///
/// Construct one per process with [`LinkRegistry::new`] and share it behind
/// an `Arc`; it is not ambient state.
pub struct LinkRegistry {
    inner: RwLock<RegistryInner>,
    generate: fn() -> String,
}

impl LinkRegistry {
    /// Creates an empty registry backed by the default code generator.
    pub fn new() -> Self {
        Self::with_generator(generate_code)
    }

    /// Creates an empty registry with a custom code generator.
    ///
    /// Used by tests to force collisions; production code wants
    /// [`LinkRegistry::new`].
    pub fn with_generator(generate: fn() -> String) -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
            generate,
        }
    }

    /// Creates a new short link.
    ///
    /// `validity_minutes` defaults to [`DEFAULT_VALIDITY_MINUTES`] and must
    /// be positive. With a `custom_code`, the code is validated and reserved
    /// atomically; without one, generated candidates are retried until an
    /// unused code is found, bounded by an attempt limit.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid target URL, non-positive
    ///   validity, or malformed custom code
    /// - [`AppError::Conflict`] if the custom code is already taken
    /// - [`AppError::Internal`] if generation exhausts its attempt limit
    ///
    /// No entry is inserted on any failure.
    pub async fn create(
        &self,
        target_url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        self.create_at(target_url, validity_minutes, custom_code, Utc::now())
            .await
    }

    /// [`LinkRegistry::create`] with an explicit creation instant.
    pub async fn create_at(
        &self,
        target_url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        validate_target_url(target_url).map_err(|e| {
            AppError::bad_request(
                "Invalid or missing URL",
                json!({ "url": target_url, "reason": e.to_string() }),
            )
        })?;

        let minutes = validity_minutes.unwrap_or(DEFAULT_VALIDITY_MINUTES);
        if minutes <= 0 {
            return Err(AppError::bad_request(
                "Validity must be a positive number of minutes",
                json!({ "validity": minutes }),
            ));
        }

        if let Some(code) = &custom_code {
            validate_custom_code(code)?;
        }

        let expires_at = now + Duration::minutes(minutes);

        // The existence check and the insert share one write guard, so two
        // concurrent creates can never both claim the same code.
        let mut inner = self.inner.write().await;

        let code = match custom_code {
            Some(code) => {
                if inner.entries.contains_key(&code) {
                    return Err(AppError::conflict(
                        "Shortcode already exists",
                        json!({ "shortcode": code }),
                    ));
                }
                code
            }
            None => self.unused_code(&inner)?,
        };

        let link = Link::new(code.clone(), target_url.to_string(), now, expires_at);

        inner.order.push(code.clone());
        inner.entries.insert(
            code,
            StoredLink {
                link: link.clone(),
                clicks: Vec::new(),
            },
        );

        debug!(code = %link.code, expires_at = %link.expires_at, "link created");

        Ok(link)
    }

    /// Generates a code not present in the registry, bounded by
    /// `MAX_GENERATION_ATTEMPTS`.
    fn unused_code(&self, inner: &RegistryInner) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = (self.generate)();

            if !inner.entries.contains_key(&candidate) {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique shortcode",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a code to its target URL, recording one click.
    ///
    /// This is the only mutation path after creation.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] for an unknown code
    /// - [`AppError::Expired`] past the link's TTL; no click is recorded
    pub async fn resolve(&self, code: &str, click: NewClick) -> Result<String, AppError> {
        self.resolve_at(code, click, Utc::now()).await
    }

    /// [`LinkRegistry::resolve`] with an explicit resolution instant.
    pub async fn resolve_at(
        &self,
        code: &str,
        click: NewClick,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let mut inner = self.inner.write().await;

        let stored = inner.entries.get_mut(code).ok_or_else(|| {
            AppError::not_found("Shortcode not found", json!({ "shortcode": code }))
        })?;

        if stored.link.is_expired_at(now) {
            return Err(AppError::expired(
                "Link has expired",
                json!({ "shortcode": code, "expired_at": stored.link.expires_at }),
            ));
        }

        stored.clicks.push(click.recorded_at(now));

        Ok(stored.link.target_url.clone())
    }

    /// Returns the full statistics for a code, regardless of expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let inner = self.inner.read().await;

        let stored = inner.entries.get(code).ok_or_else(|| {
            AppError::not_found("Shortcode not found", json!({ "shortcode": code }))
        })?;

        Ok(LinkStats {
            link: stored.link.clone(),
            clicks: stored.clicks.clone(),
        })
    }

    /// Lists every link ever created, in creation order. Expired entries
    /// are included.
    pub async fn list(&self) -> Vec<LinkSummary> {
        let inner = self.inner.read().await;

        inner
            .order
            .iter()
            .filter_map(|code| inner.entries.get(code))
            .map(|stored| LinkSummary {
                code: stored.link.code.clone(),
                target_url: stored.link.target_url.clone(),
                expires_at: stored.link.expires_at,
                click_count: stored.clicks.len(),
            })
            .collect()
    }

    /// Number of links ever created.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
