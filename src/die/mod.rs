//! Six-sided dice.
//!
//! The `Die` trait is the only source of randomness the turn machine
//! consumes. Production code draws from [`RandomDie`]; tests and replays
//! inject a fixed sequence with [`ScriptedDie`].

mod error;
mod sources;

pub use error::DieError;
pub use sources::{RandomDie, ScriptedDie};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on the die.
pub const SIDES: u8 = 6;

/// One face of a six-sided die, always in 1..=6.
///
/// # Example
///
/// ```rust
/// use reroll::die::{DieError, DieFace};
///
/// let face = DieFace::new(6).unwrap();
/// assert!(face.is_reroll());
/// assert_eq!(DieFace::new(7), Err(DieError::InvalidFace(7)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// The face that forces another roll: the highest one.
    pub const REROLL: DieFace = DieFace(SIDES);

    pub fn new(value: u8) -> Result<Self, DieError> {
        if (1..=SIDES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DieError::InvalidFace(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// True for the maximum face, which keeps a turn waiting.
    pub fn is_reroll(self) -> bool {
        self == Self::REROLL
    }
}

impl TryFrom<u8> for DieFace {
    type Error = DieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source of die faces.
///
/// Implementations must only ever produce faces in 1..=6, which `DieFace`
/// guarantees by construction.
pub trait Die {
    /// Draw one face.
    fn roll(&mut self) -> Result<DieFace, DieError>;
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> Result<DieFace, DieError> {
        (**self).roll()
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> Result<DieFace, DieError> {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_face_on_the_die() {
        for value in 1..=6 {
            assert_eq!(DieFace::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_values_off_the_die() {
        assert_eq!(DieFace::new(0), Err(DieError::InvalidFace(0)));
        assert_eq!(DieFace::new(7), Err(DieError::InvalidFace(7)));
        assert_eq!(DieFace::try_from(255), Err(DieError::InvalidFace(255)));
    }

    #[test]
    fn only_six_is_a_reroll() {
        let rerolls: Vec<u8> = (1..=6)
            .filter(|v| DieFace::new(*v).unwrap().is_reroll())
            .collect();
        assert_eq!(rerolls, vec![6]);
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let face = DieFace::new(4).unwrap();
        assert_eq!(serde_json::to_string(&face).unwrap(), "4");
        assert_eq!(serde_json::from_str::<DieFace>("4").unwrap(), face);
    }

    #[test]
    fn deserialization_enforces_range() {
        assert!(serde_json::from_str::<DieFace>("0").is_err());
        assert!(serde_json::from_str::<DieFace>("9").is_err());
    }

    fn roll_value<D: Die>(mut die: D) -> u8 {
        die.roll().unwrap().value()
    }

    #[test]
    fn borrowed_die_rolls_the_underlying_die() {
        let mut scripted = ScriptedDie::new([2, 5]).unwrap();
        assert_eq!(roll_value(&mut scripted), 2);
        assert_eq!(scripted.roll().unwrap().value(), 5);
    }

    #[test]
    fn boxed_die_is_a_die() {
        let boxed: Box<dyn Die> = Box::new(ScriptedDie::new([3]).unwrap());
        assert_eq!(roll_value(boxed), 3);
    }
}
