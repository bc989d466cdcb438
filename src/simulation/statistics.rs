//! Statistics over a sample of guess counts.
//!
//! Computes the mean (exact and rounded), spread, order statistics and a
//! contiguous frequency table keyed by guess count.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{GuessError, Result};
use crate::types::{GuessCount, SearchMode};

// ── Frequency table ─────────────────────────────────────────────────

/// Occurrences per guess count, with every key from the observed minimum to
/// the observed maximum present (unobserved counts map to 0).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable(BTreeMap<GuessCount, u64>);

impl FrequencyTable {
    pub fn from_counts(counts: &[GuessCount]) -> Self {
        let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
            return Self::default();
        };
        let mut table: BTreeMap<GuessCount, u64> = (min..=max).map(|k| (k, 0)).collect();
        for &c in counts {
            *table.entry(c).or_insert(0) += 1;
        }
        Self(table)
    }

    pub fn get(&self, count: GuessCount) -> u64 {
        self.0.get(&count).copied().unwrap_or(0)
    }

    /// Sum of all frequencies; equals the number of runs.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn max_frequency(&self) -> u64 {
        self.0.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = GuessCount> + '_ {
        self.0.keys().copied()
    }

    /// `(guess count, frequency)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (GuessCount, u64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

// ── Aggregate statistics ────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
pub struct GuessStatistics {
    pub num_runs: u64,
    pub lo: i64,
    pub hi: i64,
    pub mode: SearchMode,
    /// RNG seed, when the batch was seeded.
    pub seed: Option<u64>,
    pub mean: f64,
    /// Mean rounded to the nearest integer (half away from zero).
    pub rounded_mean: GuessCount,
    pub std_dev: f64,
    pub min: GuessCount,
    pub max: GuessCount,
    pub median: GuessCount,
    pub histogram: FrequencyTable,
}

/// Summary numbers for a raw sample, before range/mode metadata is attached.
#[derive(Clone, Debug, PartialEq)]
pub struct CountSummary {
    pub num_runs: u64,
    pub mean: f64,
    pub rounded_mean: GuessCount,
    pub std_dev: f64,
    pub min: GuessCount,
    pub max: GuessCount,
    pub median: GuessCount,
    pub histogram: FrequencyTable,
}

/// Summarise a sample of guess counts. Fails on an empty sample.
pub fn aggregate_counts(counts: &[GuessCount]) -> Result<CountSummary> {
    if counts.is_empty() {
        return Err(GuessError::invalid_input(
            "sample",
            "[]",
            "a non-empty list of guess counts",
        ));
    }
    let n = counts.len() as f64;

    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    let sum: f64 = sorted.iter().map(|&c| c as f64).sum();
    let mean = sum / n;
    let variance: f64 = sorted
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    Ok(CountSummary {
        num_runs: counts.len() as u64,
        mean,
        rounded_mean: mean.round() as GuessCount,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: sorted[sorted.len() / 2],
        histogram: FrequencyTable::from_counts(&sorted),
    })
}

impl GuessStatistics {
    pub fn from_summary(
        summary: CountSummary,
        lo: i64,
        hi: i64,
        mode: SearchMode,
        seed: Option<u64>,
    ) -> Self {
        let CountSummary {
            num_runs,
            mean,
            rounded_mean,
            std_dev,
            min,
            max,
            median,
            histogram,
        } = summary;
        Self {
            num_runs,
            lo,
            hi,
            mode,
            seed,
            mean,
            rounded_mean,
            std_dev,
            min,
            max,
            median,
            histogram,
        }
    }

    /// Pretty JSON for `--json` output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_fills_gaps() {
        let table = FrequencyTable::from_counts(&[3, 7, 3, 5]);
        let keys: Vec<GuessCount> = table.keys().collect();
        assert_eq!(keys, vec![3, 4, 5, 6, 7]);
        assert_eq!(table.get(3), 2);
        assert_eq!(table.get(4), 0);
        assert_eq!(table.get(6), 0);
        assert_eq!(table.get(99), 0);
        assert_eq!(table.total(), 4);
        assert_eq!(table.max_frequency(), 2);
    }

    #[test]
    fn test_table_empty() {
        let table = FrequencyTable::from_counts(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_frequency(), 0);
    }

    #[test]
    fn test_aggregate_basic() {
        let s = aggregate_counts(&[1, 2, 3, 4, 5, 6, 7, 7]).unwrap();
        assert_eq!(s.num_runs, 8);
        assert!((s.mean - 4.375).abs() < 1e-12);
        assert_eq!(s.rounded_mean, 4);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 7);
        assert_eq!(s.median, 5);
        assert_eq!(s.histogram.total(), 8);
        assert_eq!(s.histogram.get(7), 2);
    }

    #[test]
    fn test_rounded_mean_half_rounds_up() {
        let s = aggregate_counts(&[6, 7]).unwrap();
        assert_eq!(s.rounded_mean, 7);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let s = aggregate_counts(&[4; 10]).unwrap();
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.histogram.len(), 1);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(
            aggregate_counts(&[]),
            Err(GuessError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_json_shape() {
        let summary = aggregate_counts(&[2, 4, 4]).unwrap();
        let stats = GuessStatistics::from_summary(summary, 1, 10, SearchMode::UniformRandom, Some(7));
        let parsed: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(parsed["num_runs"], 3);
        assert_eq!(parsed["mode"], "uniform_random");
        assert_eq!(parsed["seed"], 7);
        assert_eq!(parsed["histogram"]["3"], 0);
        assert_eq!(parsed["histogram"]["4"], 2);
    }
}
