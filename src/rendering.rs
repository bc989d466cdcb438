//! Fixed-width text rendering of batch statistics.

use std::fmt::Write;

use crate::constants::{BAR_FILL, MEAN_FILL, MEAN_MARKER};
use crate::simulation::GuessStatistics;

/// Bar length for `frequency`, scaled so `max_frequency` spans `bar_width`.
pub fn bar_length(frequency: u64, max_frequency: u64, bar_width: usize) -> usize {
    if max_frequency == 0 {
        return 0;
    }
    (frequency as f64 / max_frequency as f64 * bar_width as f64).round() as usize
}

/// One line per guess count: count, frequency, proportional bar.
///
/// The line for the rounded mean is filled with [`MEAN_FILL`] and tagged.
pub fn render_histogram(stats: &GuessStatistics, bar_width: usize) -> String {
    let table = &stats.histogram;
    let max_freq = table.max_frequency();
    let key_width = table.keys().last().unwrap_or(0).to_string().len();
    let freq_width = max_freq.to_string().len();

    let mut out = String::new();
    for (count, freq) in table.iter() {
        let is_mean = count == stats.rounded_mean;
        let fill = if is_mean { MEAN_FILL } else { BAR_FILL };
        let bar: String = std::iter::repeat(fill)
            .take(bar_length(freq, max_freq, bar_width))
            .collect();
        let line = format!("{count:>key_width$} | {freq:>freq_width$} | {bar}");
        if is_mean {
            writeln!(out, "{line} {MEAN_MARKER}").unwrap();
        } else {
            writeln!(out, "{}", line.trim_end()).unwrap();
        }
    }
    out
}

/// Header block: range, mode, runs and the summary numbers.
pub fn render_summary(stats: &GuessStatistics) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Guessing in [{}, {}] ({} mode, {} games)",
        stats.lo, stats.hi, stats.mode, stats.num_runs
    )
    .unwrap();
    if let Some(seed) = stats.seed {
        writeln!(out, "  Seed:        {seed}").unwrap();
    }
    writeln!(
        out,
        "  Mean:        {:.3} (rounded: {})",
        stats.mean, stats.rounded_mean
    )
    .unwrap();
    writeln!(out, "  Std dev:     {:.3}", stats.std_dev).unwrap();
    writeln!(out, "  Min:         {}", stats.min).unwrap();
    writeln!(out, "  Median:      {}", stats.median).unwrap();
    writeln!(out, "  Max:         {}", stats.max).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{aggregate_counts, GuessStatistics};
    use crate::types::SearchMode;

    fn stats(counts: &[u32]) -> GuessStatistics {
        let summary = aggregate_counts(counts).unwrap();
        GuessStatistics::from_summary(summary, 1, 100, SearchMode::BinarySearch, None)
    }

    #[test]
    fn test_bar_length_scales_to_width() {
        assert_eq!(bar_length(10, 10, 50), 50);
        assert_eq!(bar_length(5, 10, 50), 25);
        assert_eq!(bar_length(1, 3, 10), 3);
        assert_eq!(bar_length(0, 10, 50), 0);
        assert_eq!(bar_length(0, 0, 50), 0);
    }

    #[test]
    fn test_histogram_lines() {
        // mean = 24/6 = 4 -> the "4" line is marked.
        let s = stats(&[3, 4, 4, 4, 4, 5]);
        let text = render_histogram(&s, 8);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "3 | 1 | ##",
                "4 | 4 | ======== <- mean",
                "5 | 1 | ##",
            ]
        );
    }

    #[test]
    fn test_histogram_aligns_columns() {
        let mut counts = vec![12u32; 100];
        counts.push(9);
        let s = stats(&counts);
        let text = render_histogram(&s, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 9 |   1 |");
        assert_eq!(lines[1], "10 |   0 |");
        assert_eq!(lines[3], "12 | 100 | ========== <- mean");
        let bar_col = lines[0].find('|').unwrap();
        assert!(lines.iter().all(|l| l.find('|') == Some(bar_col)));
    }

    #[test]
    fn test_summary_mentions_mode_and_seed() {
        let mut s = stats(&[1, 2, 3]);
        s.seed = Some(42);
        let text = render_summary(&s);
        assert!(text.contains("binary mode, 3 games"));
        assert!(text.contains("Seed:        42"));
        assert!(text.contains("Mean:        2.000 (rounded: 2)"));
    }
}
