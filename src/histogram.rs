//! `Histogram` maps an observed bit count to the number of trials that
//! produced it. Iteration is always in ascending bit-count order.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::BitcountError;

/// Header line of the plain text report.
pub const REPORT_HEADER: &str = "Bit count distribution:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<u64, u64>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more trial with `bit_count` set bits.
    pub fn record(&mut self, bit_count: u64) {
        *self.counts.entry(bit_count).or_insert(0) += 1;
    }

    /// Frequency of `bit_count`, zero if never observed.
    pub fn get(&self, bit_count: u64) -> u64 {
        self.counts.get(&bit_count).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, u64> {
        self.counts.iter()
    }

    /// Number of distinct bit counts observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all frequencies, i.e. the number of recorded trials.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn min(&self) -> Option<u64> {
        self.counts.keys().next().copied()
    }

    pub fn max(&self) -> Option<u64> {
        self.counts.keys().next_back().copied()
    }

    /// Average bit count over all recorded trials.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .map(|(&count, &freq)| count as f64 * freq as f64)
            .sum();
        Some(weighted / total as f64)
    }

    /// Write the plain text distribution: a header line followed by one
    /// `count: frequency` line per observed bit count.
    pub fn write_report<W: Write>(&self, mut out: W) -> Result<(), BitcountError> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (count, freq) in self.iter() {
            writeln!(out, "{count}: {freq}")?;
        }
        Ok(())
    }

    /// Write the distribution as CSV with a `bit_count,frequency` header.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), BitcountError> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(["bit_count", "frequency"])?;
        for (count, freq) in self.iter() {
            wtr.write_record([count.to_string(), freq.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = (&'a u64, &'a u64);
    type IntoIter = btree_map::Iter<'a, u64, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<u64> for Histogram {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut hist = Histogram::new();
        for bit_count in iter {
            hist.record(bit_count);
        }
        hist
    }
}

#[derive(Debug, Serialize)]
pub struct Bucket {
    pub bit_count: u64,
    pub frequency: u64,
}

/// JSON export of a completed run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub bitfield_size: usize,
    pub num_trials: u64,
    /// Initial seed in decimal.
    pub seed: String,
    pub distribution: Vec<Bucket>,
}

impl Report {
    pub fn new(bitfield_size: usize, num_trials: u64, seed: String, hist: &Histogram) -> Self {
        let distribution = hist
            .iter()
            .map(|(&bit_count, &frequency)| Bucket {
                bit_count,
                frequency,
            })
            .collect();
        Self {
            bitfield_size,
            num_trials,
            seed,
            distribution,
        }
    }

    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), BitcountError> {
        serde_json::to_writer_pretty(&mut out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_sorted_ascending() {
        let hist: Histogram = [17, 3, 17, 9].into_iter().collect();
        let mut buf = Vec::new();
        hist.write_report(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Bit count distribution:\n3: 1\n9: 1\n17: 2\n"
        );
    }

    #[test]
    fn totals_and_mean() {
        let hist: Histogram = [2, 4, 4, 6].into_iter().collect();
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.get(4), 2);
        assert_eq!(hist.get(5), 0);
        assert_eq!(hist.min(), Some(2));
        assert_eq!(hist.max(), Some(6));
        assert_eq!(hist.mean(), Some(4.0));
    }

    #[test]
    fn empty_histogram() {
        let hist = Histogram::new();
        assert!(hist.is_empty());
        assert_eq!(hist.mean(), None);
        let mut buf = Vec::new();
        hist.write_report(&mut buf).unwrap();
        assert_eq!(buf, b"Bit count distribution:\n");
    }

    #[test]
    fn csv_rows() {
        let hist: Histogram = [1, 0, 1].into_iter().collect();
        let mut buf = Vec::new();
        hist.write_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "bit_count,frequency\n0,1\n1,2\n"
        );
    }

    #[test]
    fn json_report_shape() {
        let hist: Histogram = [5, 5].into_iter().collect();
        let report = Report::new(8, 2, "42".to_string(), &hist);
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["bitfield_size"], 8);
        assert_eq!(value["num_trials"], 2);
        assert_eq!(value["seed"], "42");
        assert_eq!(value["distribution"][0]["bit_count"], 5);
        assert_eq!(value["distribution"][0]["frequency"], 2);
    }
}
