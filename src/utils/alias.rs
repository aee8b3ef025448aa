//! Random alias generation.

use base64::Engine as _;

/// Random bytes per alias before base64 encoding. 6 bytes encode to an
/// 8-character token, which keeps short links short while leaving the
/// collision probability low enough for the bounded retry in the service.
const ALIAS_LENGTH_BYTES: usize = 6;

/// Generates a short, URL-safe, unpredictable alias.
///
/// Uses `getrandom` for entropy and URL-safe base64 without padding, so
/// the result is always valid as a path segment.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_alias() -> String {
    let mut buffer = [0u8; ALIAS_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
