//! Bitfield construction from a chain of Keccak-256 digests.
//!
//! A bitfield of `size` bits is the big-endian concatenation of successive
//! digests, where each digest is the hash of the previous one and the first
//! is the hash of the seed. When `size` is not a multiple of 256 only the
//! most significant bits of the final digest are kept.

use num_bigint::BigUint;

use crate::hash::{keccak256, Seed};

/// Number of bits produced by one Keccak-256 invocation.
pub const HASH_BITS: usize = 256;

/// Output of [`generate_bitfield`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitfield {
    /// Generated bits, always below `2^size`.
    pub value: BigUint,
    /// Last full digest computed, untruncated. Seeds the next trial.
    pub last_hash: Seed,
    /// Requested width in bits.
    pub size: usize,
}

impl Bitfield {
    /// Number of set bits in the generated value.
    pub fn count_ones(&self) -> u64 {
        count_bits(&self.value)
    }
}

/// Generate a `size`-bit field by chaining Keccak-256 from `seed`.
///
/// A `size` of zero computes no hash and returns `seed` as `last_hash`.
pub fn generate_bitfield(seed: &Seed, size: usize) -> Bitfield {
    let mut value = BigUint::default();
    let mut input = *seed;
    let mut remaining = size;

    while remaining > 0 {
        let digest = keccak256(&input);
        let chunk = BigUint::from_bytes_be(&digest);
        if remaining >= HASH_BITS {
            value = (value << HASH_BITS) | chunk;
            remaining -= HASH_BITS;
        } else {
            value = (value << remaining) | (chunk >> (HASH_BITS - remaining));
            remaining = 0;
        }
        input = digest;
    }

    Bitfield {
        value,
        last_hash: input,
        size,
    }
}

/// Population count of an arbitrary-precision integer.
pub fn count_bits(n: &BigUint) -> u64 {
    n.to_u64_digits()
        .iter()
        .map(|digit| u64::from(digit.count_ones()))
        .sum()
}
