//! Default parameters shared by the library and both binaries.

/// Default lower bound of the hidden-number range.
pub const DEFAULT_LO: i64 = 1;

/// Default upper bound of the hidden-number range.
pub const DEFAULT_HI: i64 = 100;

/// Default number of games per batch.
pub const DEFAULT_REPEATS: u64 = 1000;

/// Width of the longest histogram bar, in characters.
pub const BAR_WIDTH: usize = 50;

/// Bar fill for ordinary histogram lines.
pub const BAR_FILL: char = '#';

/// Bar fill for the line matching the rounded mean.
pub const MEAN_FILL: char = '=';

/// Marker appended to the mean line.
pub const MEAN_MARKER: &str = "<- mean";

/// Environment variable holding the default RNG seed.
pub const SEED_ENV: &str = "GUESS_SEED";

/// Environment variable holding the default bar width.
pub const BAR_WIDTH_ENV: &str = "GUESS_BAR_WIDTH";

/// Widest range `--sweep` will enumerate target by target.
pub const SWEEP_LIMIT: u64 = 10_000_000;
