//! Hashing and numeric helpers.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `bytes`.
///
/// # Example
///
/// ```rust
/// use tokenstyle::hex_digest;
///
/// assert_eq!(hex_digest(b"").len(), 64);
/// assert_eq!(hex_digest(b"abc"), hex_digest(b"abc"));
/// ```
pub fn hex_digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Digests the canonical JSON form of `value`.
pub(crate) fn digest_json<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).unwrap_or_default();
    hex_digest(&bytes)
}

/// Rounds a computed length to two decimals so derived sizes print cleanly.
pub(crate) fn round_px(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
