//! Run parameters and their validation.
//!
//! The binary collects raw values from the command line without range
//! checks so that out-of-range input, including negative numbers, is
//! rejected here with a descriptive [`BitcountError::InvalidArgument`].

use num_bigint::BigUint;

use crate::hash::Seed;
use crate::BitcountError;

/// Largest seed width in bits. Seeds lie in `[0, 2^256 - 1]`.
pub const MAX_SEED_BITS: u64 = 256;

pub const DEFAULT_BITFIELD_SIZE: i64 = 32;
pub const DEFAULT_NUM_TRIALS: i64 = 1000;
pub const DEFAULT_SEED: &str = "42";

/// Unvalidated values as received from the user.
#[derive(Debug, Clone)]
pub struct RawConfig {
    pub bitfield_size: i64,
    pub num_trials: i64,
    pub seed: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            bitfield_size: DEFAULT_BITFIELD_SIZE,
            num_trials: DEFAULT_NUM_TRIALS,
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Width of each generated bitfield in bits.
    pub bitfield_size: usize,
    /// Number of sequential trials.
    pub num_trials: u64,
    /// Initial seed, big-endian.
    pub seed: Seed,
}

impl Config {
    /// Check `raw` and convert it. The first violated constraint is
    /// reported, in the order bitfield size, trial count, seed.
    pub fn validate(raw: &RawConfig) -> Result<Self, BitcountError> {
        if raw.bitfield_size < 1 {
            return Err(BitcountError::InvalidArgument(format!(
                "bitfield size must be at least 1, got {}",
                raw.bitfield_size
            )));
        }
        let bitfield_size = usize::try_from(raw.bitfield_size).map_err(|_| {
            BitcountError::InvalidArgument(format!(
                "bitfield size {} does not fit this platform",
                raw.bitfield_size
            ))
        })?;
        if raw.num_trials < 1 {
            return Err(BitcountError::InvalidArgument(format!(
                "number of trials must be at least 1, got {}",
                raw.num_trials
            )));
        }
        let seed = parse_seed(&raw.seed)?;
        Ok(Self {
            bitfield_size,
            num_trials: raw.num_trials as u64,
            seed,
        })
    }

    /// Initial seed in decimal.
    pub fn seed_decimal(&self) -> String {
        BigUint::from_bytes_be(&self.seed).to_str_radix(10)
    }
}

/// Parse a seed given in decimal or `0x`-prefixed hexadecimal.
///
/// Whitespace around the value and `_` separators are ignored. `-0` is
/// accepted as zero; any other negative value is rejected.
pub fn parse_seed(text: &str) -> Result<Seed, BitcountError> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    let parsed = if digits.is_empty() {
        None
    } else {
        BigUint::parse_bytes(digits.as_bytes(), radix)
    };
    let value = parsed.ok_or_else(|| {
        BitcountError::InvalidArgument(format!("seed {trimmed:?} is not an integer"))
    })?;

    if negative && value.bits() > 0 {
        return Err(BitcountError::InvalidArgument(format!(
            "seed must be non-negative, got {trimmed}"
        )));
    }
    if value.bits() > MAX_SEED_BITS {
        return Err(BitcountError::InvalidArgument(format!(
            "seed must be at most 2^256 - 1, got {trimmed}"
        )));
    }

    let bytes = value.to_bytes_be();
    let mut seed = [0u8; 32];
    seed[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::seed_from_u64;

    fn raw(bitfield_size: i64, num_trials: i64, seed: &str) -> RawConfig {
        RawConfig {
            bitfield_size,
            num_trials,
            seed: seed.to_string(),
        }
    }

    fn is_invalid(res: Result<Config, BitcountError>) -> bool {
        matches!(res, Err(BitcountError::InvalidArgument(_)))
    }

    #[test]
    fn defaults_validate() {
        let cfg = Config::validate(&RawConfig::default()).unwrap();
        assert_eq!(cfg.bitfield_size, 32);
        assert_eq!(cfg.num_trials, 1000);
        assert_eq!(cfg.seed, seed_from_u64(42));
        assert_eq!(cfg.seed_decimal(), "42");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(is_invalid(Config::validate(&raw(0, 10, "1"))));
        assert!(is_invalid(Config::validate(&raw(-5, 10, "1"))));
        assert!(is_invalid(Config::validate(&raw(8, 0, "1"))));
        assert!(is_invalid(Config::validate(&raw(8, -1, "1"))));
        assert!(is_invalid(Config::validate(&raw(8, 10, "-1"))));
    }

    #[test]
    fn seed_upper_bound() {
        let max = (BigUint::from(1u32) << 256usize) - BigUint::from(1u32);
        let seed = parse_seed(&max.to_str_radix(10)).unwrap();
        assert_eq!(seed, [0xff; 32]);

        let over = BigUint::from(1u32) << 256usize;
        assert!(matches!(
            parse_seed(&over.to_str_radix(10)),
            Err(BitcountError::InvalidArgument(_))
        ));
    }

    #[test]
    fn seed_formats() {
        assert_eq!(parse_seed("0x2a").unwrap(), seed_from_u64(42));
        assert_eq!(parse_seed(" 1_000 ").unwrap(), seed_from_u64(1000));
        assert_eq!(parse_seed("-0").unwrap(), seed_from_u64(0));
        assert!(parse_seed("").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("forty-two").is_err());
        assert!(parse_seed("1.5").is_err());
    }

    #[test]
    fn size_checked_before_seed() {
        match Config::validate(&raw(0, 10, "nope")) {
            Err(BitcountError::InvalidArgument(msg)) => assert!(msg.contains("bitfield size")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
