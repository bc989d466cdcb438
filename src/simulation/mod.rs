//! Batch simulation and statistics.
//!
//! - [`engine`]: play N games sequentially and aggregate them
//! - [`statistics`]: mean, spread and the frequency table of guess counts

pub mod engine;
pub mod statistics;

// Re-export commonly used items
pub use engine::{aggregate, collect_counts, simulate_batch, sweep_all_targets};
pub use statistics::{aggregate_counts, CountSummary, FrequencyTable, GuessStatistics};
