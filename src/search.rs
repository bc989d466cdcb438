//! Search engine: the Computer guesses a hidden number in `[lo, hi]`.
//!
//! After each guess it is told whether the guess was too low, too high or
//! correct, and narrows its working range accordingly. The game has no try
//! limit; the interesting output is how many guesses it takes.
//!
//! | Mode | Next guess | Bound |
//! |------|------------|-------|
//! | [`SearchMode::BinarySearch`] | `floor((lo + hi) / 2)` | `floor(log2(n)) + 1` guesses |
//! | [`SearchMode::UniformRandom`] | uniform draw from `[lo, hi]` | terminates almost surely |
//!
//! Two entry points exist on purpose: [`guess`] plays against a target chosen
//! by the caller, [`guess_random_target`] hides its own number first (only
//! useful for self-play and statistics).

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::types::{GuessCount, Range, SearchMode, Signal};

/// Source of uniform draws from an inclusive integer range.
///
/// Every [`rand::Rng`] is a sampler; tests can plug in a scripted one.
pub trait RangeSampler {
    /// Return a value drawn uniformly from `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn sample_inclusive(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: Rng + ?Sized> RangeSampler for R {
    #[inline]
    fn sample_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.random_range(lo..=hi)
    }
}

/// One guess and the feedback it received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GuessStep {
    pub guess: i64,
    pub signal: Signal,
    /// Working range the guess was drawn from.
    pub range: Range,
}

/// Every step of one game, ending with the correct guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuessTrace {
    pub target: i64,
    pub mode: SearchMode,
    pub steps: Vec<GuessStep>,
}

impl GuessTrace {
    pub fn count(&self) -> GuessCount {
        self.steps.len() as GuessCount
    }
}

/// In-flight game state: the working range and the number of guesses made.
#[derive(Clone, Debug)]
pub struct GuessRun {
    range: Range,
    target: i64,
    mode: SearchMode,
    guesses: GuessCount,
    found: bool,
}

impl GuessRun {
    pub fn new(lo: i64, hi: i64, target: i64, mode: SearchMode) -> Result<Self> {
        let range = Range::new(lo, hi)?;
        range.check_target(target)?;
        Ok(Self {
            range,
            target,
            mode,
            guesses: 0,
            found: false,
        })
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn guesses(&self) -> GuessCount {
        self.guesses
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Make one guess and narrow the working range on a miss.
    ///
    /// A correct guess collapses the working range to `[target, target]`.
    /// Calling `step` after that repeats the correct guess without counting
    /// it again or drawing from the sampler.
    pub fn step<S: RangeSampler + ?Sized>(&mut self, sampler: &mut S) -> GuessStep {
        if self.found {
            return GuessStep {
                guess: self.target,
                signal: Signal::Correct,
                range: self.range,
            };
        }

        let range = self.range;
        let guess = next_guess(range, self.mode, sampler);
        let signal = Signal::compare(guess, self.target);
        self.guesses += 1;

        match range.narrow(guess, signal) {
            Some(narrowed) => self.range = narrowed,
            None => {
                self.range = Range::single(self.target);
                self.found = true;
            }
        }
        GuessStep {
            guess,
            signal,
            range,
        }
    }

    /// Step until the target is found and return the guess count.
    pub fn finish<S: RangeSampler + ?Sized>(mut self, sampler: &mut S) -> GuessCount {
        while !self.found {
            self.step(sampler);
        }
        self.guesses
    }
}

/// Next guess for the given strategy.
#[inline]
pub fn next_guess<S: RangeSampler + ?Sized>(range: Range, mode: SearchMode, sampler: &mut S) -> i64 {
    match mode {
        SearchMode::BinarySearch => range.midpoint(),
        SearchMode::UniformRandom => sampler.sample_inclusive(range.lo(), range.hi()),
    }
}

/// Guess an externally chosen `target` in `[lo, hi]`.
///
/// Fails with `InvalidRange` if `lo > hi` and `OutOfRange` if the target lies
/// outside the range. `BinarySearch` never touches the sampler.
pub fn guess<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    target: i64,
    mode: SearchMode,
    sampler: &mut S,
) -> Result<GuessCount> {
    let count = GuessRun::new(lo, hi, target, mode)?.finish(sampler);
    debug!("[{lo}, {hi}] target={target} mode={mode}: {count} guesses");
    Ok(count)
}

/// Hide a number drawn uniformly from `[lo, hi]`, then guess it.
pub fn guess_random_target<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    sampler: &mut S,
) -> Result<GuessCount> {
    Range::new(lo, hi)?;
    let target = sampler.sample_inclusive(lo, hi);
    guess(lo, hi, target, mode, sampler)
}

/// Like [`guess_random_target`], but record every guess with its feedback.
pub fn trace_random_target<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    mode: SearchMode,
    sampler: &mut S,
) -> Result<GuessTrace> {
    Range::new(lo, hi)?;
    let target = sampler.sample_inclusive(lo, hi);
    trace_guesses(lo, hi, target, mode, sampler)
}

/// Like [`guess`], but record every guess with its feedback.
pub fn trace_guesses<S: RangeSampler + ?Sized>(
    lo: i64,
    hi: i64,
    target: i64,
    mode: SearchMode,
    sampler: &mut S,
) -> Result<GuessTrace> {
    let mut run = GuessRun::new(lo, hi, target, mode)?;
    let mut steps = Vec::new();
    while !run.is_found() {
        steps.push(run.step(sampler));
    }
    Ok(GuessTrace {
        target,
        mode,
        steps,
    })
}
