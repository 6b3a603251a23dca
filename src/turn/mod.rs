//! A player's turn: roll until the die shows something other than a six.
//!
//! - [`TurnState`] is the two-variant state, [`Outcome`] its 1..=5 payload
//! - [`TurnStateMachine`] owns the state and the injected die
//! - [`play_turn`] runs a whole turn under a [`TurnConfig`] roll cap
//!
//! The reroll rule is fixed: roll again if and only if the face is the
//! die's highest.

mod error;
mod machine;
mod state;

pub use error::TurnError;
pub use machine::TurnStateMachine;
pub use state::{Outcome, TurnState};

use crate::config::TurnConfig;
use crate::die::Die;

/// Play a complete turn with `die`, returning the finished machine.
///
/// # Example
///
/// ```rust
/// use reroll::config::TurnConfig;
/// use reroll::die::ScriptedDie;
/// use reroll::turn::play_turn;
///
/// let turn = play_turn(ScriptedDie::new([6, 2]).unwrap(), &TurnConfig::default()).unwrap();
/// assert_eq!(turn.result().map(|o| o.value()), Some(2));
/// assert_eq!(turn.history().rerolls(), 1);
/// ```
pub fn play_turn<D: Die>(die: D, config: &TurnConfig) -> Result<TurnStateMachine<D>, TurnError> {
    let mut turn = TurnStateMachine::new(die);
    turn.roll_until_done(config.max_rolls)?;
    Ok(turn)
}
