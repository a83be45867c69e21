use std::sync::Arc;

use crate::registry::LinkRegistry;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
    pub base_url: String,
}

impl AppState {
    pub fn new(registry: Arc<LinkRegistry>, base_url: impl Into<String>) -> Self {
        Self {
            registry,
            base_url: base_url.into(),
        }
    }

    /// Constructs the fully-qualified short link for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_joins_base_and_code() {
        let state = AppState::new(Arc::new(LinkRegistry::new()), "http://localhost:3000");
        assert_eq!(state.short_link("abc123"), "http://localhost:3000/abc123");
    }

    #[test]
    fn test_short_link_trims_trailing_slash() {
        let state = AppState::new(Arc::new(LinkRegistry::new()), "https://s.example.com/");
        assert_eq!(state.short_link("abc123"), "https://s.example.com/abc123");
    }
}
