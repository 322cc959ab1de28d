//! Fighter: one participant's combat snapshot

use pokeduel_protocol::PokemonData;

use super::pokemon_type::Type;
use super::stats::BaseStats;
use crate::error::Result;

/// Health bar band, by remaining hp percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HpBand {
    /// Above 50%
    Healthy,
    /// Above 20%
    Wounded,
    Critical,
}

impl HpBand {
    pub fn from_percent(percent: u32) -> Self {
        if percent > 50 {
            HpBand::Healthy
        } else if percent > 20 {
            HpBand::Wounded
        } else {
            HpBand::Critical
        }
    }
}

/// A fighter assigned to a roster slot
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    name: String,
    types: Vec<Type>,
    stats: BaseStats,

    /// Always the sum of `stats`
    total_stats: u64,

    /// May drop below zero mid-battle; read through [`Fighter::current_hp`]
    hp: i64,
    max_hp: i64,
}

impl Fighter {
    /// Create a fighter at full hp.
    ///
    /// Fails with `InvalidStats` if any stat is negative. Duplicate types are collapsed.
    pub fn new(name: impl Into<String>, types: Vec<Type>, stats: BaseStats) -> Result<Self> {
        stats.validate()?;

        let mut unique = Vec::with_capacity(types.len());
        for t in types {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }

        let max_hp = i64::from(stats.hp);
        Ok(Self {
            name: name.into(),
            types: unique,
            stats,
            total_stats: Self::sum(&stats),
            hp: max_hp,
            max_hp,
        })
    }

    /// Create from provider data.
    ///
    /// Type names outside the 18 canonical types are dropped.
    pub fn from_protocol(data: &PokemonData) -> Result<Self> {
        let types = data
            .types
            .iter()
            .filter_map(|name| {
                let parsed = Type::from_protocol(name);
                if parsed.is_none() {
                    tracing::warn!(pokemon = %data.name, type_name = %name, "Ignoring unknown type");
                }
                parsed
            })
            .collect();

        Self::new(&data.name, types, BaseStats::from_array(data.stats))
    }

    fn sum(stats: &BaseStats) -> u64 {
        // validated non-negative before this is called
        stats.total().max(0) as u64
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    /// Replace the stat line, keeping `total_stats` and `max_hp` in step.
    ///
    /// Current hp is capped at the new maximum.
    pub fn set_stats(&mut self, stats: BaseStats) -> Result<()> {
        stats.validate()?;
        self.stats = stats;
        self.total_stats = Self::sum(&stats);
        self.max_hp = i64::from(stats.hp);
        self.hp = self.hp.min(self.max_hp);
        Ok(())
    }

    /// Sum of the six base stats
    pub fn total_stats(&self) -> u64 {
        self.total_stats
    }

    /// Stored hp, possibly negative
    pub fn raw_hp(&self) -> i64 {
        self.hp
    }

    /// Hp clamped at zero, for display and comparisons
    pub fn current_hp(&self) -> u64 {
        self.hp.max(0) as u64
    }

    pub fn max_hp(&self) -> u64 {
        self.max_hp as u64
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage. Hp is allowed to go negative.
    pub fn take_damage(&mut self, damage: u32) {
        self.hp -= i64::from(damage);
    }

    /// Back to full hp
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    /// Remaining hp as a percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        ((self.current_hp() * 100) / self.max_hp()) as u32
    }

    pub fn hp_band(&self) -> HpBand {
        HpBand::from_percent(self.hp_percent())
    }
}
