//! Markup identifiers derived from asset names.
//!
//! Legacy manifests get an opaque hash-based identifier; structured
//! manifests get a readable one built from the sanitized name.

use sha2::{Digest, Sha256};

/// Hex digits of the digest kept in a hashed identifier.
const HASH_DIGITS: usize = 16;

/// Reduce a name to `[A-Za-z0-9_]`: drop every `@`, then replace anything
/// else outside `[A-Za-z0-9]` with `_`.
///
/// Idempotent: `sanitize(&sanitize(s)) == sanitize(s)`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '@')
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Opaque identifier: `e` followed by the leading hex digits of the
/// SHA-256 of the name. Always starts with a letter so it is a valid
/// CSS id selector.
pub fn hashed(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    let hex = hex::encode(digest);
    format!("e{}", &hex[..HASH_DIGITS])
}
