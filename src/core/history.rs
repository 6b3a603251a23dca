//! Roll history tracking.
//!
//! Every roll of a die is recorded, whether or not it moved the machine.
//! The history is immutable: `record` returns a new history.

use super::state::State;
use crate::die::DieFace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single roll and the transition it caused.
///
/// A reroll leaves `from == to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RollRecord<S: State> {
    /// 1-based roll number within the turn
    pub attempt: usize,
    /// Face the die showed
    pub face: DieFace,
    /// State before the roll
    pub from: S,
    /// State after the roll
    pub to: S,
    /// When the roll happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> RollRecord<S> {
    /// Whether this roll changed the machine's state.
    pub fn is_transition(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of rolls.
///
/// # Example
///
/// ```rust
/// use reroll::core::{RollHistory, RollRecord};
/// use reroll::die::DieFace;
/// use reroll::turn::{Outcome, TurnState};
/// use chrono::Utc;
///
/// let six = DieFace::new(6).unwrap();
/// let four = DieFace::new(4).unwrap();
///
/// let history = RollHistory::new()
///     .record(RollRecord {
///         attempt: 1,
///         face: six,
///         from: TurnState::WaitingToRoll,
///         to: TurnState::WaitingToRoll,
///         timestamp: Utc::now(),
///     })
///     .record(RollRecord {
///         attempt: 2,
///         face: four,
///         from: TurnState::WaitingToRoll,
///         to: TurnState::Done(Outcome::from_face(four).unwrap()),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.faces(), vec![six, four]);
/// assert_eq!(history.rerolls(), 1);
/// assert_eq!(history.get_path().len(), 2); // WaitingToRoll -> Done(4)
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RollHistory<S: State> {
    rolls: Vec<RollRecord<S>>,
}

impl<S: State> Default for RollHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> RollHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    /// Record a roll, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, roll: RollRecord<S>) -> Self {
        let mut rolls = self.rolls.clone();
        rolls.push(roll);
        Self { rolls }
    }

    /// Get the distinct states traversed, in order.
    ///
    /// Rerolls that left the state unchanged do not add an entry, so a
    /// turn that ended after any number of sixes yields two states.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path: Vec<&S> = Vec::new();
        if let Some(first) = self.rolls.first() {
            path.push(&first.from);
        }
        for roll in self.rolls.iter().filter(|r| r.is_transition()) {
            path.push(&roll.to);
        }
        path
    }

    /// Faces rolled, in order.
    pub fn faces(&self) -> Vec<DieFace> {
        self.rolls.iter().map(|r| r.face).collect()
    }

    /// Number of rolls that forced another roll.
    pub fn rerolls(&self) -> usize {
        self.rolls.iter().filter(|r| r.face.is_reroll()).count()
    }

    /// Time from the first roll to the last.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.rolls.first()?, self.rolls.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn rolls(&self) -> &[RollRecord<S>] {
        &self.rolls
    }

    pub fn last(&self) -> Option<&RollRecord<S>> {
        self.rolls.last()
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}
