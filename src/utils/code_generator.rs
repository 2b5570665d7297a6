//! Short code generation.
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`. Nothing here checks for
//! collisions; uniqueness is left to the store's constraint.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of minted short codes.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Generates a random ASCII alphanumeric short code of `length` characters.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
