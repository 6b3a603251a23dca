//! Core types shared by every machine in the crate:
//! - the `State` trait
//! - the immutable per-roll history

mod history;
mod state;

pub use history::{RollHistory, RollRecord};
pub use state::State;
