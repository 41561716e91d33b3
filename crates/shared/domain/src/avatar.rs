//! Identity hash used to derive avatar references from email addresses.

use md5::{Digest, Md5};

/// Hash an email address into an opaque avatar reference.
///
/// The address is trimmed and lower-cased before hashing, so every spelling
/// of the same mailbox maps to the same 32-character hex digest.
pub fn hash_email(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!("{digest:x}")
}
