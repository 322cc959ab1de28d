//! Base stat line of a fighter

use pokeduel_protocol::Stat;

use crate::error::{BattleError, Result};

/// The six base stats, as supplied by the data provider.
///
/// Values are signed so malformed input can be represented and rejected by
/// [`BaseStats::validate`] instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl BaseStats {
    pub fn new(
        hp: i32,
        attack: i32,
        defense: i32,
        special_attack: i32,
        special_defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Build from values in [`Stat::ALL`] order
    pub fn from_array(values: [i32; 6]) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] = values;
        Self::new(hp, attack, defense, special_attack, special_defense, speed)
    }

    /// Get the value of a stat
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set the value of a stat
    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Iterate (stat, value) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Reject the first negative stat
    pub fn validate(&self) -> Result<()> {
        match self.iter().find(|(_, value)| *value < 0) {
            Some((stat, value)) => Err(BattleError::InvalidStats { stat, value }),
            None => Ok(()),
        }
    }

    /// Sum of all six stats. Widened so six large values cannot overflow.
    pub fn total(&self) -> i64 {
        self.iter().map(|(_, value)| i64::from(value)).sum()
    }
}
