//! Six-digit one-time passcode generation.
//!
//! Only the SHA-256 hash of a code is ever persisted; the plaintext code
//! exists just long enough to hand to the delivery channel.

use rand::RngExt;
use sha2::{Digest, Sha256};

/// A freshly generated passcode and its storable hash.
#[derive(Debug, Clone)]
pub struct OtpCode {
    /// The plaintext six-digit code, for delivery only.
    pub code: String,
    /// SHA-256 hex digest of the code, for storage.
    pub code_hash: String,
}

/// Generates and verifies six-digit one-time passcodes.
#[derive(Debug, Clone)]
pub struct OtpGenerator;

impl OtpGenerator {
    /// Creates a new passcode generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random six-digit code, zero-padded.
    pub fn generate(&self) -> OtpCode {
        let mut rng = rand::rng();
        let code = format!("{:06}", rng.random_range(0..1_000_000u32));
        let code_hash = self.hash_code(&code);
        OtpCode { code, code_hash }
    }

    /// Hashes a code for storage or comparison.
    pub fn hash_code(&self, code: &str) -> String {
        let digest = Sha256::digest(code.as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Compares a submitted code against a stored hash in constant time.
    pub fn verify(&self, code: &str, stored_hash: &str) -> bool {
        constant_time_eq(&self.hash_code(code), stored_hash)
    }
}

impl Default for OtpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte-wise comparison that does not short-circuit on the first mismatch.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
