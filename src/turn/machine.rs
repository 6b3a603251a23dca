//! The turn state machine: roll until something other than a six.

use super::error::TurnError;
use super::state::{Outcome, TurnState};
use crate::checkpoint::{CheckpointError, TurnCheckpoint};
use crate::core::{RollHistory, RollRecord, State};
use crate::die::{Die, DieFace};
use chrono::Utc;
use tracing::{debug, info, warn};

/// One player's turn.
///
/// The machine owns exactly one [`TurnState`] and replaces it wholesale on
/// every transition. It starts in `WaitingToRoll` and cannot be reset.
///
/// # Example
///
/// ```rust
/// use reroll::die::ScriptedDie;
/// use reroll::turn::{TurnState, TurnStateMachine};
///
/// let die = ScriptedDie::new([6, 6, 3]).unwrap();
/// let mut turn = TurnStateMachine::new(die);
///
/// while !turn.is_done() {
///     turn.roll_once().unwrap();
/// }
///
/// assert_eq!(turn.result().map(|o| o.value()), Some(3));
/// assert_eq!(turn.rolls(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TurnStateMachine<D: Die> {
    state: TurnState,
    die: D,
    history: RollHistory<TurnState>,
}

impl<D: Die> TurnStateMachine<D> {
    /// Create a machine waiting for its first roll.
    pub fn new(die: D) -> Self {
        Self {
            state: TurnState::WaitingToRoll,
            die,
            history: RollHistory::new(),
        }
    }

    pub fn current_state(&self) -> &TurnState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.state.is_final()
    }

    pub fn result(&self) -> Option<Outcome> {
        self.state.result()
    }

    /// Number of rolls taken so far this turn.
    pub fn rolls(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &RollHistory<TurnState> {
        &self.history
    }

    pub fn die(&self) -> &D {
        &self.die
    }

    /// Roll the die once and return the face it showed.
    ///
    /// A six keeps the turn waiting; any other face finishes it. Once the
    /// turn is done this returns [`TurnError::AlreadyDone`] without
    /// touching the die, the state, or the history. A die error also
    /// leaves the machine unchanged.
    pub fn roll_once(&mut self) -> Result<DieFace, TurnError> {
        if let TurnState::Done(result) = self.state {
            warn!(%result, "roll requested after the turn finished");
            return Err(TurnError::AlreadyDone { result });
        }

        let face = self.die.roll()?;
        let next = self.state.after_roll(face)?;
        let attempt = self.history.len() + 1;

        self.history = self.history.record(RollRecord {
            attempt,
            face,
            from: self.state,
            to: next,
            timestamp: Utc::now(),
        });
        debug!(attempt, %face, state = next.name(), "rolled");

        if let TurnState::Done(result) = next {
            info!(%result, rolls = attempt, "turn finished");
        }
        self.state = next;
        Ok(face)
    }

    /// Keep rolling until the turn is done, at most `max_rolls` more times.
    ///
    /// A turn that is already done returns its result without rolling.
    pub fn roll_until_done(&mut self, max_rolls: usize) -> Result<Outcome, TurnError> {
        if let Some(result) = self.state.result() {
            return Ok(result);
        }

        for _ in 0..max_rolls {
            self.roll_once()?;
            if let Some(result) = self.state.result() {
                return Ok(result);
            }
        }

        warn!(limit = max_rolls, "roll limit reached without a result");
        Err(TurnError::RollLimitExceeded { limit: max_rolls })
    }

    /// Snapshot the turn. The die is not part of the snapshot.
    pub fn checkpoint(&self) -> TurnCheckpoint {
        TurnCheckpoint::new(self.state, self.history.clone())
    }

    /// Rebuild a turn from a checkpoint, rolling `die` from here on.
    ///
    /// The checkpoint is validated first; every violation found is
    /// reported in the error.
    pub fn resume(checkpoint: TurnCheckpoint, die: D) -> Result<Self, CheckpointError> {
        checkpoint.verify()?;
        debug!(
            id = %checkpoint.id,
            state = checkpoint.state.name(),
            rolls = checkpoint.history.len(),
            "resumed turn from checkpoint"
        );
        Ok(Self {
            state: checkpoint.state,
            die,
            history: checkpoint.history,
        })
    }

    /// Give back the die, dropping the turn.
    pub fn into_die(self) -> D {
        self.die
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::{DieError, RandomDie, ScriptedDie};

    fn scripted(values: &[u8]) -> TurnStateMachine<ScriptedDie> {
        TurnStateMachine::new(ScriptedDie::new(values.iter().copied()).unwrap())
    }

    fn done(value: u8) -> TurnState {
        TurnState::Done(Outcome::try_from(value).unwrap())
    }

    #[test]
    fn new_machine_is_waiting() {
        let turn = scripted(&[]);
        assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
        assert!(!turn.is_done());
        assert_eq!(turn.rolls(), 0);
        assert!(turn.history().is_empty());
    }

    #[test]
    fn sixes_then_three() {
        let mut turn = scripted(&[6, 6, 3]);

        assert_eq!(turn.roll_once().unwrap().value(), 6);
        assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
        assert_eq!(turn.roll_once().unwrap().value(), 6);
        assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
        assert_eq!(turn.roll_once().unwrap().value(), 3);
        assert_eq!(turn.current_state(), &done(3));
    }

    #[test]
    fn first_roll_finishes() {
        let mut turn = scripted(&[2]);
        assert_eq!(turn.roll_once().unwrap().value(), 2);
        assert_eq!(turn.current_state(), &done(2));
        assert_eq!(turn.rolls(), 1);
    }

    #[test]
    fn four_sixes_then_one() {
        let mut turn = scripted(&[6, 6, 6, 6, 1]);

        for _ in 0..4 {
            turn.roll_once().unwrap();
            assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
        }
        turn.roll_once().unwrap();
        assert_eq!(turn.current_state(), &done(1));
        assert_eq!(turn.history().rerolls(), 4);
    }

    #[test]
    fn rolling_after_done_is_an_error_and_changes_nothing() {
        let mut turn = scripted(&[5, 1]);
        turn.roll_once().unwrap();

        let err = turn.roll_once().unwrap_err();
        assert_eq!(
            err,
            TurnError::AlreadyDone {
                result: Outcome::try_from(5).unwrap()
            }
        );
        assert_eq!(turn.current_state(), &done(5));
        assert_eq!(turn.rolls(), 1);
        assert_eq!(turn.die().remaining(), 1);
    }

    #[test]
    fn history_records_every_roll() {
        let mut turn = scripted(&[6, 4]);
        turn.roll_once().unwrap();
        turn.roll_once().unwrap();

        let rolls = turn.history().rolls();
        assert_eq!(rolls.len(), 2);
        assert_eq!(rolls[0].attempt, 1);
        assert_eq!(rolls[0].from, TurnState::WaitingToRoll);
        assert_eq!(rolls[0].to, TurnState::WaitingToRoll);
        assert!(!rolls[0].is_transition());
        assert_eq!(rolls[1].attempt, 2);
        assert_eq!(rolls[1].to, done(4));
        assert!(rolls[1].is_transition());
        assert_eq!(
            turn.history().get_path(),
            vec![&TurnState::WaitingToRoll, &done(4)]
        );
    }

    #[test]
    fn die_failure_leaves_machine_untouched() {
        let mut turn = scripted(&[6]);
        turn.roll_once().unwrap();

        let err = turn.roll_once().unwrap_err();
        assert_eq!(err, TurnError::Die(DieError::Exhausted { rolled: 1 }));
        assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
        assert_eq!(turn.rolls(), 1);
    }

    #[test]
    fn roll_until_done_stops_on_first_non_six() {
        let mut turn = scripted(&[6, 6, 2, 4]);
        let result = turn.roll_until_done(10).unwrap();
        assert_eq!(result.value(), 2);
        assert_eq!(turn.rolls(), 3);
        assert_eq!(turn.die().remaining(), 1);
    }

    #[test]
    fn roll_until_done_respects_the_cap() {
        let mut turn = scripted(&[6, 6, 6, 6]);
        let err = turn.roll_until_done(3).unwrap_err();
        assert_eq!(err, TurnError::RollLimitExceeded { limit: 3 });
        assert_eq!(turn.rolls(), 3);
        assert!(!turn.is_done());
    }

    #[test]
    fn roll_until_done_on_finished_turn_returns_result() {
        let mut turn = scripted(&[3]);
        turn.roll_once().unwrap();
        assert_eq!(turn.roll_until_done(5).unwrap().value(), 3);
        assert_eq!(turn.rolls(), 1);
    }

    #[test]
    fn random_turn_terminates_within_cap() {
        for seed in 0..100 {
            let mut turn = TurnStateMachine::new(RandomDie::seeded(seed));
            let result = turn.roll_until_done(1000).unwrap();
            assert!((1..=5).contains(&result.value()));
            assert_eq!(turn.current_state(), &TurnState::Done(result));
        }
    }

    #[test]
    fn machine_works_with_a_borrowed_die() {
        let mut die = ScriptedDie::new([6, 1, 2]).unwrap();
        {
            let mut turn = TurnStateMachine::new(&mut die);
            assert_eq!(turn.roll_until_done(5).unwrap().value(), 1);
        }
        assert_eq!(die.remaining(), 1);
    }

    #[test]
    fn checkpoint_and_resume_continue_the_turn() {
        let mut turn = scripted(&[6, 6]);
        turn.roll_once().unwrap();
        turn.roll_once().unwrap();

        let checkpoint = turn.checkpoint();
        let mut resumed =
            TurnStateMachine::resume(checkpoint, ScriptedDie::new([6, 4]).unwrap()).unwrap();

        assert_eq!(resumed.rolls(), 2);
        assert_eq!(resumed.roll_until_done(5).unwrap().value(), 4);
        assert_eq!(resumed.rolls(), 4);
        let attempts: Vec<usize> = resumed.history().rolls().iter().map(|r| r.attempt).collect();
        assert_eq!(attempts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn resume_rejects_a_tampered_checkpoint() {
        let mut turn = scripted(&[6]);
        turn.roll_once().unwrap();

        let mut checkpoint = turn.checkpoint();
        checkpoint.state = done(2);

        let err = TurnStateMachine::resume(checkpoint, ScriptedDie::default()).unwrap_err();
        assert!(matches!(err, CheckpointError::ValidationFailed(_)));
    }

    #[test]
    fn into_die_hands_back_the_die() {
        let mut turn = scripted(&[1, 2, 3]);
        turn.roll_once().unwrap();
        assert_eq!(turn.into_die().remaining(), 2);
    }
}
