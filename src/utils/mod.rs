//! Utility functions.
//!
//! - [`code_generator`] - Random short code generation
//! - [`location`] - `Location` header encoding for redirect targets

pub mod code_generator;
pub mod location;
