//! Checkpoint and resume for turns in progress.
//!
//! A checkpoint captures the turn state and its roll history, but not the
//! die: the caller supplies a fresh die on resume. JSON is the readable
//! format, bincode the compact one.

use crate::core::RollHistory;
use crate::turn::TurnState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

pub mod error;
pub mod validation;

pub use error::CheckpointError;
pub use validation::{CheckpointValidation, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a turn.
///
/// # Example
///
/// ```rust
/// use reroll::checkpoint::TurnCheckpoint;
/// use reroll::die::ScriptedDie;
/// use reroll::turn::TurnStateMachine;
///
/// let mut turn = TurnStateMachine::new(ScriptedDie::new([6]).unwrap());
/// turn.roll_once().unwrap();
///
/// let json = turn.checkpoint().to_json().unwrap();
/// let restored = TurnCheckpoint::from_json(&json).unwrap();
///
/// let mut resumed = TurnStateMachine::resume(restored, ScriptedDie::new([5]).unwrap()).unwrap();
/// assert_eq!(resumed.roll_until_done(10).unwrap().value(), 5);
/// assert_eq!(resumed.rolls(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State of the turn when the checkpoint was taken
    pub state: TurnState,

    /// Every roll made so far
    pub history: RollHistory<TurnState>,
}

impl TurnCheckpoint {
    pub fn new(state: TurnState, history: RollHistory<TurnState>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            history,
        }
    }

    /// Check the checkpoint for consistency, collecting every violation.
    pub fn validate(&self) -> CheckpointValidation {
        validation::validate(self)
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn verify(&self) -> Result<(), CheckpointError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(CheckpointError::ValidationFailed(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
