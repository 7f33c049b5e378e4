//! Keccak-256 primitive and seed encoding.
//!
//! This is the original Keccak padding used by Ethereum, not the NIST
//! `SHA3-256` variant. The two differ in their domain separation byte and
//! produce unrelated digests for the same input.

use sha3::{Digest, Keccak256};

/// A 256-bit unsigned integer in big-endian byte order.
pub type Seed = [u8; 32];

/// Return the 32-byte Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Encode `n` as a big-endian, zero-padded 32-byte seed.
pub fn seed_from_u64(n: u64) -> Seed {
    let mut seed = [0u8; 32];
    seed[24..].copy_from_slice(&n.to_be_bytes());
    seed
}
