//! Opaque bearer-token generation and shape checks.
//!
//! Tokens are 32 bytes from a CSPRNG, base64url-encoded without
//! padding (43 characters). They carry no payload; the session row in the
//! database is the source of truth, which keeps revocation a simple delete.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Raw token entropy in bytes.
pub const TOKEN_BYTES: usize = 32;

/// Encoded token length (base64url, no padding).
pub const TOKEN_LENGTH: usize = 43;

/// Generate a fresh session token.
#[must_use]
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Whether a presented token has the shape this service issues.
///
/// Rejecting malformed tokens here avoids a database round-trip for
/// garbage input; it says nothing about whether a session exists.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LENGTH
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
