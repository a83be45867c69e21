//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is resolved.
///
/// Metadata fields come from the redirect request and are empty strings
/// when the client did not supply them.
#[derive(Debug, Clone)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub remote_addr: String,
    pub user_agent: String,
}

/// Request-side metadata for a click, before the registry assigns the
/// timestamp at append time.
#[derive(Debug, Clone, Default)]
pub struct NewClick {
    pub referrer: String,
    pub remote_addr: String,
    pub user_agent: String,
}

impl NewClick {
    /// Turns the metadata into a [`Click`] stamped with the given instant.
    pub fn recorded_at(self, clicked_at: DateTime<Utc>) -> Click {
        Click {
            clicked_at,
            referrer: self.referrer,
            remote_addr: self.remote_addr,
            user_agent: self.user_agent,
        }
    }
}
