//! Admin password digests.
//!
//! Unsalted SHA-256, hex encoded. Existing rows in `admin_credentials` were
//! written in this format, so the digest must stay bit-for-bit stable.

use sha2::{Digest, Sha256};

/// Hash a password into its stored hex digest.
///
/// ```
/// use vinipim_auth_types::password::hash_password;
///
/// assert_eq!(
///     hash_password("secret123"),
///     "fcf730b6d95236ecd3c9fc2d92d7b6b2bb061514961aec041d6c7a7192f592e4"
/// );
/// ```
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Recompute the digest of `password` and compare it with `digest`.
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
