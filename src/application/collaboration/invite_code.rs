//! Invitation code generation and hashing
//!
//! Codes are opaque 128-bit random values rendered as hex. Only the SHA-256
//! digest is persisted; the code itself is embedded once in the invite link.

use rand::Rng;

/// Generate a fresh invite code (32 hex chars).
pub fn generate_invite_code() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: [u8; 16] = rng.gen();
    hex::encode(random_bytes)
}

/// Hash an invite code for storage using SHA-256.
pub fn hash_invite_code(code: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ── Tests ──────────────────────────────────────────────────────
