//! Turn states and the pure transition rule.

use super::error::TurnError;
use crate::core::State;
use crate::die::{DieError, DieFace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a finished turn: any face except the reroll face, so 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Outcome(u8);

impl Outcome {
    /// Outcome for a face, or `None` when the face means "roll again".
    pub fn from_face(face: DieFace) -> Option<Self> {
        (!face.is_reroll()).then(|| Self(face.value()))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Outcome {
    type Error = DieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let face = DieFace::new(value)?;
        Self::from_face(face).ok_or(DieError::InvalidFace(value))
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.0
    }
}

impl From<Outcome> for DieFace {
    fn from(outcome: Outcome) -> Self {
        // Outcomes are a strict subset of faces.
        DieFace::new(outcome.0).unwrap_or(DieFace::REROLL)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a player's turn stands.
///
/// # Example
///
/// ```rust
/// use reroll::core::State;
/// use reroll::die::DieFace;
/// use reroll::turn::TurnState;
///
/// let waiting = TurnState::WaitingToRoll;
/// let still_waiting = waiting.after_roll(DieFace::new(6).unwrap()).unwrap();
/// assert_eq!(still_waiting, TurnState::WaitingToRoll);
///
/// let done = still_waiting.after_roll(DieFace::new(3).unwrap()).unwrap();
/// assert!(done.is_final());
/// assert_eq!(done.result().map(|o| o.value()), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No non-six face has come up yet.
    #[default]
    WaitingToRoll,
    /// The turn ended on this face. Terminal.
    Done(Outcome),
}

impl TurnState {
    /// Apply one roll.
    ///
    /// A six keeps the turn waiting, any other face ends it. Rolling a
    /// finished turn is an error and produces no new state.
    pub fn after_roll(&self, face: DieFace) -> Result<TurnState, TurnError> {
        match self {
            Self::Done(result) => Err(TurnError::AlreadyDone { result: *result }),
            Self::WaitingToRoll => Ok(match Outcome::from_face(face) {
                Some(outcome) => Self::Done(outcome),
                None => Self::WaitingToRoll,
            }),
        }
    }

    pub fn result(&self) -> Option<Outcome> {
        match self {
            Self::Done(outcome) => Some(*outcome),
            Self::WaitingToRoll => None,
        }
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::WaitingToRoll)
    }
}

impl State for TurnState {
    fn name(&self) -> &str {
        match self {
            Self::WaitingToRoll => "WaitingToRoll",
            Self::Done(_) => "Done",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitingToRoll => f.write_str("WaitingToRoll"),
            Self::Done(outcome) => write!(f, "Done({outcome})"),
        }
    }
}
