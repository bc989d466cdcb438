//! Batch simulation: play many games and aggregate the guess counts.
//!
//! Games run strictly one after another and share a single random source, so
//! a seeded batch is fully reproducible.

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::{GuessError, Result};
use crate::search::{guess, guess_random_target, RangeSampler};
use crate::types::{GuessCount, Range, SearchMode};

use super::statistics::{aggregate_counts, GuessStatistics};

/// Play `repeats` games in `[lo, hi]`, each against a freshly drawn target.
///
/// The first engine error aborts the batch and is returned unchanged.
pub fn collect_counts<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    repeats: u64,
    sampler: &mut S,
) -> Result<Vec<GuessCount>> {
    if repeats == 0 {
        return Err(GuessError::invalid_input(
            "repeats",
            repeats,
            "a positive integer",
        ));
    }
    (0..repeats)
        .map(|_| guess_random_target(lo, hi, mode, sampler))
        .collect()
}

/// Play `repeats` games and summarise them.
pub fn aggregate<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    repeats: u64,
    sampler: &mut S,
) -> Result<GuessStatistics> {
    let counts = collect_counts(lo, hi, mode, repeats, sampler)?;
    let summary = aggregate_counts(&counts)?;
    info!(
        "{repeats} games in [{lo}, {hi}] mode={mode}: mean {:.3} (min {}, max {})",
        summary.mean, summary.min, summary.max
    );
    Ok(GuessStatistics::from_summary(summary, lo, hi, mode, None))
}

/// [`aggregate`] with a `SmallRng` seeded from `seed`. Same seed, same result.
pub fn simulate_batch(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    repeats: u64,
    seed: u64,
) -> Result<GuessStatistics> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut stats = aggregate(lo, hi, mode, repeats, &mut rng)?;
    stats.seed = Some(seed);
    Ok(stats)
}

/// Play exactly one game per target in `[lo, hi]`.
///
/// For `BinarySearch` this gives the exact expected count under a uniformly
/// chosen target. Ranges wider than `max_targets` are rejected.
pub fn sweep_all_targets<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    max_targets: u64,
    sampler: &mut S,
) -> Result<GuessStatistics> {
    let range = Range::new(lo, hi)?;
    if range.len() > max_targets as u128 {
        return Err(GuessError::invalid_input(
            "range",
            range,
            "no wider than the sweep limit",
        ));
    }
    let counts = (lo..=hi)
        .map(|target| guess(lo, hi, target, mode, sampler))
        .collect::<Result<Vec<_>>>()?;
    let summary = aggregate_counts(&counts)?;
    info!(
        "swept {} targets in {range} mode={mode}: mean {:.3}",
        counts.len(),
        summary.mean
    );
    Ok(GuessStatistics::from_summary(summary, lo, hi, mode, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_histogram_sums_to_repeats() {
        for mode in SearchMode::ALL {
            let stats = aggregate(1, 100, mode, 1000, &mut rng()).unwrap();
            assert_eq!(stats.num_runs, 1000);
            assert_eq!(stats.histogram.total(), 1000);

            let keys: Vec<GuessCount> = stats.histogram.keys().collect();
            let expected: Vec<GuessCount> = (stats.min..=stats.max).collect();
            assert_eq!(keys, expected, "mode={mode}");
        }
    }

    #[test]
    fn test_binary_mean_1_100() {
        let stats = aggregate(1, 100, SearchMode::BinarySearch, 1000, &mut rng()).unwrap();
        assert!(
            (6..=7).contains(&stats.rounded_mean),
            "rounded_mean={}",
            stats.rounded_mean
        );
        assert!(stats.mean > 5.5 && stats.mean < 6.1, "mean={}", stats.mean);
        assert!(stats.max <= 7);
    }

    #[test]
    fn test_zero_repeats_rejected() {
        assert!(matches!(
            aggregate(1, 100, SearchMode::BinarySearch, 0, &mut rng()),
            Err(GuessError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_engine_error_aborts_batch() {
        assert_eq!(
            aggregate(100, 1, SearchMode::UniformRandom, 10, &mut rng()).unwrap_err(),
            GuessError::InvalidRange { lo: 100, hi: 1 }
        );
    }

    #[test]
    fn test_seeded_batch_reproducible() {
        let a = simulate_batch(1, 1000, SearchMode::UniformRandom, 500, 42).unwrap();
        let b = simulate_batch(1, 1000, SearchMode::UniformRandom, 500, 42).unwrap();
        assert_eq!(a.seed, Some(42));
        assert_eq!(a.histogram, b.histogram);
        assert_eq!(a.mean, b.mean);
    }

    #[test]
    fn test_sweep_binary_exact_mean() {
        // Depths 1..7 hold 1, 2, 4, 8, 16, 32, 37 targets: 580 guesses total.
        let stats = sweep_all_targets(1, 100, SearchMode::BinarySearch, 1_000, &mut rng()).unwrap();
        assert_eq!(stats.num_runs, 100);
        assert!((stats.mean - 5.8).abs() < 1e-12, "mean={}", stats.mean);
        assert_eq!(stats.histogram.get(7), 37);
        assert_eq!(stats.histogram.get(1), 1);
    }

    #[test]
    fn test_sweep_limit() {
        assert!(sweep_all_targets(1, 1_000_000, SearchMode::BinarySearch, 1_000, &mut rng()).is_err());
    }
}
