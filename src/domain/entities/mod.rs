//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its time-to-live
//! - [`Click`] - A recorded redirect on a shortened link
//! - [`NewClick`] - Request-side click metadata before a timestamp is assigned

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::Link;
