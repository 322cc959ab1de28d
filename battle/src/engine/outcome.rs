//! Battle outcomes

use crate::types::Side;

/// The resolved result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win(Side),
    Draw,
}

impl Outcome {
    /// Higher value wins; equal values are a draw
    pub fn compare(a: u64, b: u64) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Outcome::Win(Side::A),
            std::cmp::Ordering::Less => Outcome::Win(Side::B),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Same outcome seen with the sides swapped
    pub fn mirrored(&self) -> Self {
        match self {
            Outcome::Win(side) => Outcome::Win(side.opponent()),
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "Side {} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Final report of a finished real-time battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: Outcome,

    /// Clamped remaining hp per side, indexed by [`Side::index`]
    pub final_hp: [u64; 2],

    /// Ticks played
    pub ticks: u32,
}

impl BattleResult {
    pub fn final_hp(&self, side: Side) -> u64 {
        self.final_hp[side.index()]
    }
}
