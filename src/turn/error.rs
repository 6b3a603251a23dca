//! Turn error types.

use super::state::Outcome;
use crate::die::DieError;
use thiserror::Error;

/// Errors that can occur while playing a turn
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnError {
    /// The turn already finished; the die was not rolled
    #[error("Turn already finished with {result}, no further rolls allowed")]
    AlreadyDone { result: Outcome },

    /// Roll cap reached while still waiting for a non-six
    #[error("No result after {limit} roll(s)")]
    RollLimitExceeded { limit: usize },

    #[error("Die failed: {0}")]
    Die(#[from] DieError),
}
