//! # Guess Number — how many tries does the Computer need?
//!
//! The Computer knows the bounds `[lo, hi]` of a hidden number. After every
//! wrong guess it is told whether the guess was too low or too high, and it
//! has unlimited tries. This crate measures how many guesses that takes.
//!
//! | Part | Module | Description |
//! |------|--------|-------------|
//! | Search engine | [`search`] | One game: binary search or uniform random guessing |
//! | Aggregator | [`simulation`] | N games, mean, spread, frequency table |
//! | Renderer | [`rendering`] | Fixed-width text histogram |
//!
//! ## Counting convention
//!
//! A [`GuessCount`](types::GuessCount) includes the final, correct guess: a
//! first-try hit counts 1, and binary search for 42 in `[1, 100]` takes 7
//! (50, 25, 37, 43, 40, 41, 42).
//!
//! ## Randomness
//!
//! Every function that may draw numbers takes an explicit
//! [`RangeSampler`](search::RangeSampler). Any `rand::Rng` qualifies, so tests
//! use a seeded `SmallRng` or a scripted sampler.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod rendering;
pub mod search;
pub mod simulation;
pub mod types;

pub use error::{GuessError, Result};
pub use search::{guess, guess_random_target, trace_guesses, RangeSampler};
pub use simulation::{aggregate, GuessStatistics};
pub use types::{GuessCount, Range, SearchMode, Signal};
