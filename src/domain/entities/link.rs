//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping.
///
/// All fields are fixed at creation; the only state that changes afterwards
/// is the click list, which lives in the registry entry rather than here.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link is past its expiry at the given instant.
    ///
    /// A resolve at exactly `expires_at` still succeeds; only strictly
    /// later instants are expired.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        at > self.expires_at
    }
}
