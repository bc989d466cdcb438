//! Shared environment configuration for both binaries.
//!
//! Consolidates `GUESS_SEED` and `GUESS_BAR_WIDTH` reads and logger setup.
//! Command-line flags take precedence over the environment.

use log::LevelFilter;

use crate::constants::{BAR_WIDTH, BAR_WIDTH_ENV, SEED_ENV};

/// Read `GUESS_SEED`. `None` when unset or not a `u64`.
pub fn env_seed() -> Option<u64> {
    std::env::var(SEED_ENV).ok().and_then(|s| s.trim().parse().ok())
}

/// Read `GUESS_BAR_WIDTH` (default [`BAR_WIDTH`]).
pub fn env_bar_width() -> usize {
    std::env::var(BAR_WIDTH_ENV)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(BAR_WIDTH)
}

/// Resolve the seed: explicit flag, then `GUESS_SEED`, else none (entropy).
pub fn resolve_seed(flag: Option<u64>) -> Option<u64> {
    flag.or_else(env_seed)
}

/// Initialise `env_logger` at `level` (falls back to `warn` if unparsable).
/// Logs go to stderr so stdout only carries the report.
pub fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(filter)
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_seed_wins() {
        assert_eq!(resolve_seed(Some(5)), Some(5));
    }

    // The only test touching these variables, so no other test races on them.
    #[test]
    fn test_env_fallbacks() {
        std::env::remove_var(BAR_WIDTH_ENV);
        assert_eq!(env_bar_width(), BAR_WIDTH);
        std::env::set_var(BAR_WIDTH_ENV, "abc");
        assert_eq!(env_bar_width(), BAR_WIDTH);
        std::env::set_var(BAR_WIDTH_ENV, "-3");
        assert_eq!(env_bar_width(), BAR_WIDTH);
        std::env::set_var(BAR_WIDTH_ENV, " 72 ");
        assert_eq!(env_bar_width(), 72);
        std::env::remove_var(BAR_WIDTH_ENV);

        std::env::set_var(SEED_ENV, "not-a-seed");
        assert_eq!(resolve_seed(None), None);
        std::env::set_var(SEED_ENV, "99");
        assert_eq!(resolve_seed(None), Some(99));
        assert_eq!(resolve_seed(Some(5)), Some(5));
        std::env::remove_var(SEED_ENV);
        assert_eq!(resolve_seed(None), None);
    }
}
