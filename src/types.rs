//! Core value types: the search range, the two guessing strategies, and the
//! ternary feedback a guess receives.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GuessError, Result};

/// Number of guesses taken to find the target, counting the final correct
/// guess. A first-try hit is 1.
pub type GuessCount = u32;

/// Closed integer interval `[lo, hi]` known to contain the target.
///
/// The fields are private so that `lo <= hi` holds for every value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Range {
    lo: i64,
    hi: i64,
}

impl Range {
    /// Fails with [`GuessError::InvalidRange`] when `lo > hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo > hi {
            return Err(GuessError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// The one-value range `[value, value]`.
    pub fn single(value: i64) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Number of integers in the range. `u128` so `[i64::MIN, i64::MAX]` fits.
    pub fn len(&self) -> u128 {
        (self.hi as i128 - self.lo as i128 + 1) as u128
    }

    /// A valid range always holds at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lower-biased midpoint, `floor((lo + hi) / 2)` without overflow.
    #[inline]
    pub fn midpoint(&self) -> i64 {
        (self.lo as i128 + self.hi as i128).div_euclid(2) as i64
    }

    /// Fails with [`GuessError::OutOfRange`] unless `target` lies in the range.
    pub fn check_target(&self, target: i64) -> Result<()> {
        if !self.contains(target) {
            return Err(GuessError::OutOfRange {
                target,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    /// Narrow after a guess that missed. `None` when the guess was correct.
    ///
    /// Callers only pass guesses drawn from the range and a target inside it,
    /// so the narrowed range is never empty.
    pub(crate) fn narrow(&self, guess: i64, signal: Signal) -> Option<Self> {
        match signal {
            Signal::TooLow => Some(Self {
                lo: guess + 1,
                hi: self.hi,
            }),
            Signal::TooHigh => Some(Self {
                lo: self.lo,
                hi: guess - 1,
            }),
            Signal::Correct => None,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// How the next guess is chosen from the current range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Deterministic midpoint halving.
    #[default]
    BinarySearch,
    /// Uniform draw from the current range.
    UniformRandom,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::BinarySearch, SearchMode::UniformRandom];

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::BinarySearch => "binary",
            SearchMode::UniformRandom => "random",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "binary-search" | "binary_search" => Ok(SearchMode::BinarySearch),
            "random" | "uniform" | "uniform-random" | "uniform_random" => {
                Ok(SearchMode::UniformRandom)
            }
            _ => Err(GuessError::invalid_input(
                "mode",
                s,
                "one of: binary, random",
            )),
        }
    }
}

/// Feedback for a single guess, relative to the hidden target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    TooLow,
    TooHigh,
    Correct,
}

impl Signal {
    #[inline]
    pub fn compare(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Less => Signal::TooLow,
            std::cmp::Ordering::Greater => Signal::TooHigh,
            std::cmp::Ordering::Equal => Signal::Correct,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signal::TooLow => "too low",
            Signal::TooHigh => "too high",
            Signal::Correct => "correct",
        })
    }
}

/// Parse a textual argument as an integer, raising
/// [`GuessError::InvalidInput`] for anything else (`"3.5"`, `"abc"`, `""`).
pub fn parse_integer(name: &str, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| GuessError::invalid_input(name, text, "an integer"))
}

/// Like [`parse_integer`] but also rejects zero and negative values.
pub fn parse_positive(name: &str, text: &str) -> Result<u64> {
    match text.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(GuessError::invalid_input(name, text, "a positive integer")),
    }
}
