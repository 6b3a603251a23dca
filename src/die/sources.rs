//! Concrete dice.

use super::{Die, DieError, DieFace, SIDES};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A fair die backed by a random number generator.
///
/// # Example
///
/// ```rust
/// use reroll::die::{Die, RandomDie};
///
/// let mut die = RandomDie::seeded(7);
/// let face = die.roll().unwrap();
/// assert!((1..=6).contains(&face.value()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomDie<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomDie<ThreadRng> {
    /// Die drawing from the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomDie<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDie<StdRng> {
    /// Reproducible die: the same seed always yields the same faces.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Die seeded once from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomDie<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Die for RandomDie<R> {
    fn roll(&mut self) -> Result<DieFace, DieError> {
        DieFace::new(self.rng.random_range(1..=SIDES))
    }
}

/// A die that shows a fixed sequence of faces, then runs dry.
///
/// Faces are validated when the die is built, so a bad script fails
/// before any roll happens.
///
/// # Example
///
/// ```rust
/// use reroll::die::{Die, DieError, ScriptedDie};
///
/// let mut die = ScriptedDie::new([6, 3]).unwrap();
/// assert_eq!(die.roll().unwrap().value(), 6);
/// assert_eq!(die.roll().unwrap().value(), 3);
/// assert_eq!(die.roll(), Err(DieError::Exhausted { rolled: 2 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedDie {
    faces: VecDeque<DieFace>,
    rolled: usize,
}

impl ScriptedDie {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Result<Self, DieError> {
        let faces = values
            .into_iter()
            .map(DieFace::new)
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { faces, rolled: 0 })
    }

    pub fn from_faces(faces: impl IntoIterator<Item = DieFace>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            rolled: 0,
        }
    }

    /// Faces not yet rolled.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Faces handed out so far.
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> Result<DieFace, DieError> {
        let face = self.faces.pop_front().ok_or(DieError::Exhausted {
            rolled: self.rolled,
        })?;
        self.rolled += 1;
        Ok(face)
    }
}
