//! Reroll: a dice-turn state machine
//!
//! A player's turn is a two-state machine: keep rolling a six-sided die
//! while it shows a six, stop on anything else and keep that face.
//!
//! # Core Concepts
//!
//! - **TurnState**: `WaitingToRoll` or `Done(outcome)`, with `Done` terminal
//! - **Die**: the injectable randomness source (random or scripted)
//! - **RollHistory**: immutable record of every roll in the turn
//! - **Checkpoint**: serializable snapshot of a turn that can be resumed
//!
//! # Example
//!
//! ```rust
//! use reroll::die::ScriptedDie;
//! use reroll::turn::{TurnState, TurnStateMachine};
//!
//! let mut turn = TurnStateMachine::new(ScriptedDie::new([6, 6, 3]).unwrap());
//! assert_eq!(turn.current_state(), &TurnState::WaitingToRoll);
//!
//! let result = turn.roll_until_done(1000).unwrap();
//! assert_eq!(result.value(), 3);
//! assert_eq!(turn.history().rerolls(), 2);
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod die;
pub mod turn;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, TurnCheckpoint};
pub use config::TurnConfig;
pub use crate::core::{RollHistory, RollRecord, State};
pub use die::{Die, DieError, DieFace, RandomDie, ScriptedDie};
pub use turn::{play_turn, Outcome, TurnError, TurnState, TurnStateMachine};
