//! `Location` header encoding for stored redirect targets.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is in a redirect target: unreserved characters plus the
/// URL delimiters, so scheme, path, query and fragment keep their meaning.
/// `%` stays unescaped so already-encoded targets are not double-encoded.
const LOCATION_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'%')
    .remove(b'#')
    .remove(b'?')
    .remove(b'=')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';');

/// Percent-encodes a stored long URL so it is always a valid header value.
///
/// Control characters, spaces and non-ASCII text are escaped; everything
/// else passes through unchanged.
///
/// ```
/// use shortlink::utils::location::encode_location;
///
/// assert_eq!(encode_location("https://example.com/a b"), "https://example.com/a%20b");
/// ```
pub fn encode_location(long_url: &str) -> String {
    utf8_percent_encode(long_url, LOCATION_SAFE).to_string()
}
