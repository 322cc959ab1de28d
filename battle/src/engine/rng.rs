//! Damage rolls
//!
//! The engine never touches an ambient random source; a [`DamageRoller`] is injected
//! into each [`BattleSession`](super::BattleSession) so battles can be replayed.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of damage values for strikes
pub trait DamageRoller: Send {
    /// Uniform integer in `min..=max`. Bounds given in the wrong order are swapped.
    fn roll(&mut self, min: u32, max: u32) -> u32;
}

/// Seeded [`StdRng`] roller.
///
/// Two rollers created with the same seed produce the same sequence.
pub struct SeededRoller {
    initial_seed: u64,
    rng: StdRng,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            initial_seed: seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roller with a fresh random seed, readable through [`SeededRoller::initial_seed`]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed to pass to [`SeededRoller::new`] to replay this roller
    pub fn initial_seed(&self) -> u64 {
        self.initial_seed
    }
}

impl DamageRoller for SeededRoller {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed list of rolls, for tests and replays.
///
/// Each value is clamped into the requested range. Once the script runs out, every roll
/// returns the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    rolls: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRoller {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Rolls handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Scripted rolls not yet used
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DamageRoller for ScriptedRoller {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.consumed += 1;
        self.rolls.pop_front().map_or(lo, |value| value.clamp(lo, hi))
    }
}
