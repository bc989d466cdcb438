//! Error type for input-contract violations.
//!
//! Every variant is raised synchronously before any guessing starts and is
//! never recovered internally: the aggregator lets the first failure abort
//! the whole batch.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("{name} must be {expected}, got '{value}'")]
    InvalidInput {
        name: String,
        value: String,
        expected: &'static str,
    },
    #[error("lo can't be more than hi (lo={lo}, hi={hi})")]
    InvalidRange { lo: i64, hi: i64 },
    #[error("target {target} is outside the range [{lo}, {hi}]")]
    OutOfRange { target: i64, lo: i64, hi: i64 },
}

impl GuessError {
    pub(crate) fn invalid_input(name: &str, value: impl ToString, expected: &'static str) -> Self {
        GuessError::InvalidInput {
            name: name.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuessError>;
