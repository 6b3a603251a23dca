//! Die error types.

use thiserror::Error;

/// Errors that can occur when building faces or drawing from a die
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DieError {
    /// Value outside 1..=6
    #[error("Invalid die face {0}, expected a value from 1 to 6")]
    InvalidFace(u8),

    /// A scripted die ran out of faces
    #[error("Scripted die exhausted after {rolled} roll(s)")]
    Exhausted { rolled: usize },
}
