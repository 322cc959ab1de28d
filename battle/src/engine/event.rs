//! What a session reports to renderers and notification sinks

use crate::types::{Fighter, HpBand, Side};

use super::outcome::Outcome;

/// A single strike within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub attacker: Side,
    pub attacker_slot: usize,

    /// Slot on the opposing side that took the hit
    pub target_slot: usize,
    pub damage: u32,
}

impl Strike {
    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }
}

/// Discrete notifications raised by a session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// Slots per side, indexed by [`Side::index`]
    BattleStarted { sizes: [usize; 2] },
    Hit(Strike),
    Victory(Outcome),
}

/// Display state of one fighter after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterSnapshot {
    pub side: Side,
    pub slot: usize,
    pub name: String,

    /// Clamped at zero
    pub hp: u64,
    pub max_hp: u64,
    pub band: HpBand,
}

impl FighterSnapshot {
    pub fn of(side: Side, slot: usize, fighter: &Fighter) -> Self {
        Self {
            side,
            slot,
            name: fighter.name().to_string(),
            hp: fighter.current_hp(),
            max_hp: fighter.max_hp(),
            band: fighter.hp_band(),
        }
    }
}

/// Everything that happened during one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u32,

    /// Strikes in roll order: side A by slot, then side B by slot
    pub strikes: Vec<Strike>,

    /// Post-tick state of every fighter, side A first
    pub snapshots: Vec<FighterSnapshot>,

    /// Notifications in order: hits, then victory if the battle ended
    pub events: Vec<BattleEvent>,

    /// Set when this tick finished the battle
    pub outcome: Option<Outcome>,
}

impl TickReport {
    /// Clamped hp of a side after this tick
    pub fn alive_hp(&self, side: Side) -> u64 {
        self.snapshots
            .iter()
            .filter(|s| s.side == side)
            .map(|s| s.hp)
            .sum()
    }

    /// Total damage dealt by a side this tick
    pub fn damage_dealt(&self, side: Side) -> u64 {
        self.strikes
            .iter()
            .filter(|s| s.attacker == side)
            .map(|s| u64::from(s.damage))
            .sum()
    }
}
