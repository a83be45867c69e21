//! # Shortlink
//!
//! An in-memory URL shortening service with per-click telemetry, built with Axum.
//!
//! ## Architecture
//!
//! All state lives in a single process-memory registry:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities (`Link`, `Click`)
//! - **Registry** ([`registry`]) - The in-memory short-code store owning
//!   creation, uniqueness, expiry, and click logging
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Generated or custom short codes with atomic uniqueness enforcement
//! - Per-link time-to-live; expired links stay visible in stats but no
//!   longer redirect
//! - Click telemetry (timestamp, referrer, remote address, user agent)
//! - Structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export BASE_URL="https://s.example.com"
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod registry;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Click, Link, NewClick};
    pub use crate::error::AppError;
    pub use crate::registry::{LinkRegistry, LinkStats, LinkSummary};
    pub use crate::state::AppState;
}
