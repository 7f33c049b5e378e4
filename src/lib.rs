//! Bit count distribution of pseudorandom bitfields.
//!
//! Bitfields are built by chaining Keccak-256 from a seed (see
//! [`generate_bitfield`]). A run of trials feeds each bitfield's last digest
//! into the next trial and tallies the number of set bits per trial into a
//! [`Histogram`]. Everything is deterministic: the same seed, size and
//! trial count always give the same histogram.

pub mod bitfield;
pub mod config;
mod error;
pub mod hash;
pub mod histogram;
pub mod io_utils;
pub mod trials;

pub use bitfield::{count_bits, generate_bitfield, Bitfield, HASH_BITS};
pub use config::{parse_seed, Config, RawConfig, MAX_SEED_BITS};
pub use error::BitcountError;
pub use hash::{keccak256, seed_from_u64, Seed};
pub use histogram::{Histogram, Report, REPORT_HEADER};
pub use trials::{run_trials, Trial, Trials};
