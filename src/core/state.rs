//! Core State trait for machine states.
//!
//! A state is a plain value: inspecting it never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into roll records
/// - `PartialEq`: history consistency checks compare states
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states are written into checkpoints
///
/// # Example
///
/// ```rust
/// use reroll::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Coin {
///     Spinning,
///     Landed(bool),
/// }
///
/// impl State for Coin {
///     fn name(&self) -> &str {
///         match self {
///             Self::Spinning => "Spinning",
///             Self::Landed(_) => "Landed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Landed(_))
///     }
/// }
///
/// assert!(Coin::Landed(true).is_final());
/// assert_eq!(Coin::Spinning.name(), "Spinning");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Variant name for display and logging. Payloads are not included.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// No transition leaves a final state. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Off,
        On(u8),
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On(_) => "On",
            }
        }
    }

    #[test]
    fn name_ignores_payload() {
        assert_eq!(Light::On(1).name(), "On");
        assert_eq!(Light::On(200).name(), "On");
        assert_eq!(Light::Off.name(), "Off");
    }

    #[test]
    fn is_final_defaults_to_false() {
        assert!(!Light::Off.is_final());
        assert!(!Light::On(3).is_final());
    }

    #[test]
    fn payload_survives_serialization() {
        let state = Light::On(42);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Light = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
