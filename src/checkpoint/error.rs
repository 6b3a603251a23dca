//! Checkpoint error types.

use super::validation::CheckpointViolation;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint is well-formed but describes an impossible turn
    #[error("Checkpoint validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<CheckpointViolation>),
}
