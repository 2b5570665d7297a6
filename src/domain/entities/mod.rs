//! Core domain entities.
//!
//! - [`ShortLinkRecord`] - A persisted short code to long URL mapping
//! - [`NewShortLink`] - Input for inserting a new mapping

pub mod short_link;

pub use short_link::{NewShortLink, ShortLinkRecord};
