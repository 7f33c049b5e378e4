//! Sequential trials over a single Keccak-256 chain.
//!
//! Each trial generates one bitfield and hands its last digest to the next
//! trial as the seed, so trials cannot be reordered or run in parallel.

use log::{debug, trace};

use crate::bitfield::generate_bitfield;
use crate::hash::Seed;
use crate::histogram::Histogram;

/// Result of one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    /// Zero-based position in the run.
    pub index: u64,
    /// Seed this trial started from.
    pub seed: Seed,
    /// Set bits in the generated bitfield.
    pub bit_count: u64,
    /// Seed for the following trial.
    pub last_hash: Seed,
}

/// Iterator over the trials of a run, threading the seed forward.
#[derive(Debug, Clone)]
pub struct Trials {
    seed: Seed,
    bitfield_size: usize,
    next_index: u64,
    num_trials: u64,
}

impl Trials {
    pub fn new(seed: Seed, bitfield_size: usize, num_trials: u64) -> Self {
        Self {
            seed,
            bitfield_size,
            next_index: 0,
            num_trials,
        }
    }

    /// Seed the next trial will start from.
    pub fn current_seed(&self) -> &Seed {
        &self.seed
    }
}

impl Iterator for Trials {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        if self.next_index >= self.num_trials {
            return None;
        }
        let field = generate_bitfield(&self.seed, self.bitfield_size);
        let trial = Trial {
            index: self.next_index,
            seed: self.seed,
            bit_count: field.count_ones(),
            last_hash: field.last_hash,
        };
        self.seed = field.last_hash;
        self.next_index += 1;
        Some(trial)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.num_trials - self.next_index;
        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Run `num_trials` chained trials and tally their bit counts.
pub fn run_trials(seed: &Seed, bitfield_size: usize, num_trials: u64) -> Histogram {
    let mut hist = Histogram::new();
    for trial in Trials::new(*seed, bitfield_size, num_trials) {
        trace!(
            "trial {}: seed={} bits={}",
            trial.index,
            hex::encode(trial.seed),
            trial.bit_count
        );
        hist.record(trial.bit_count);
    }
    debug!(
        "{} trials of {} bits, {} distinct counts",
        num_trials,
        bitfield_size,
        hist.len()
    );
    hist
}
