//! Consistency checks for checkpoints.
//!
//! Every check runs and every violation is reported, so a damaged
//! checkpoint can be diagnosed in one pass.

use super::{TurnCheckpoint, CHECKPOINT_VERSION};
use crate::core::{RollRecord, State};
use crate::die::DieFace;
use crate::turn::TurnState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single inconsistency found in a checkpoint
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointViolation {
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Roll numbered {found} where roll {expected} was expected")]
    AttemptOutOfOrder { expected: usize, found: usize },

    #[error("Roll {attempt} starts in {from} but the turn was in {expected}")]
    BrokenChain {
        attempt: usize,
        from: TurnState,
        expected: TurnState,
    },

    #[error("Roll {attempt} happened after the turn finished")]
    RollAfterDone { attempt: usize },

    #[error("Roll {attempt} showed {face} but moved the turn to {to}")]
    FaceMismatch {
        attempt: usize,
        face: DieFace,
        to: TurnState,
    },

    #[error("Checkpoint state {found} does not match the rolls ({expected})")]
    StateMismatch {
        expected: TurnState,
        found: TurnState,
    },
}

pub type CheckpointValidation = Validation<(), NonEmptyVec<CheckpointViolation>>;

fn check(violation: Option<CheckpointViolation>) -> CheckpointValidation {
    match violation {
        Some(violation) => Validation::fail(violation),
        None => Validation::success(()),
    }
}

fn check_version(version: u32) -> CheckpointValidation {
    check((version != CHECKPOINT_VERSION).then_some(CheckpointViolation::UnsupportedVersion {
        found: version,
        supported: CHECKPOINT_VERSION,
    }))
}

fn check_attempt(index: usize, roll: &RollRecord<TurnState>) -> CheckpointValidation {
    let expected = index + 1;
    check((roll.attempt != expected).then_some(CheckpointViolation::AttemptOutOfOrder {
        expected,
        found: roll.attempt,
    }))
}

fn check_chain(previous: TurnState, roll: &RollRecord<TurnState>) -> CheckpointValidation {
    let violation = if previous.is_final() {
        Some(CheckpointViolation::RollAfterDone {
            attempt: roll.attempt,
        })
    } else if roll.from != previous {
        Some(CheckpointViolation::BrokenChain {
            attempt: roll.attempt,
            from: roll.from,
            expected: previous,
        })
    } else {
        None
    };
    check(violation)
}

fn check_face(roll: &RollRecord<TurnState>) -> CheckpointValidation {
    // A roll out of a finished state is already reported by the chain check.
    let violation = match roll.from.after_roll(roll.face) {
        Ok(next) if next != roll.to => Some(CheckpointViolation::FaceMismatch {
            attempt: roll.attempt,
            face: roll.face,
            to: roll.to,
        }),
        _ => None,
    };
    check(violation)
}

/// Run every check against a checkpoint, accumulating all violations.
pub fn validate(checkpoint: &TurnCheckpoint) -> CheckpointValidation {
    let mut checks = vec![check_version(checkpoint.version)];

    let mut previous = TurnState::WaitingToRoll;
    for (index, roll) in checkpoint.history.rolls().iter().enumerate() {
        checks.push(check_attempt(index, roll));
        checks.push(check_chain(previous, roll));
        checks.push(check_face(roll));
        previous = roll.to;
    }

    checks.push(check(
        (checkpoint.state != previous).then_some(CheckpointViolation::StateMismatch {
            expected: previous,
            found: checkpoint.state,
        }),
    ));

    Validation::all_vec(checks).map(|_| ())
}
