//! Sides and their rosters

use std::collections::BTreeSet;

use super::fighter::Fighter;
use super::pokemon_type::Type;
use crate::config::TypeScope;
use crate::error::{BattleError, Result};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in resolution order
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Array index (A = 0, B = 1)
    pub fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// One player's fighters, in fixed slots
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    slots: Vec<Option<Fighter>>,
}

impl Roster {
    /// Create an empty roster. A size of zero is raised to one.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size.max(1)],
        }
    }

    /// One slot
    pub fn singles() -> Self {
        Self::new(1)
    }

    /// Two slots
    pub fn doubles() -> Self {
        Self::new(2)
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Put a fighter in a slot, returning whoever was there
    pub fn assign(&mut self, slot: usize, fighter: Fighter) -> Result<Option<Fighter>> {
        let size = self.size();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(BattleError::InvalidSlot { slot, size })?;
        Ok(entry.replace(fighter))
    }

    /// Empty a slot
    pub fn remove(&mut self, slot: usize) -> Option<Fighter> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn get(&self, slot: usize) -> Option<&Fighter> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Fighter> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Populated slots as (slot, fighter)
    pub fn fighters(&self) -> impl Iterator<Item = (usize, &Fighter)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, f)| f.as_ref().map(|f| (slot, f)))
    }

    /// Populated slots whose fighter still has hp
    pub fn living(&self) -> impl Iterator<Item = (usize, &Fighter)> {
        self.fighters().filter(|(_, f)| f.is_alive())
    }

    /// True iff every slot holds a fighter
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Clear every slot
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Restore every fighter to full hp
    pub fn restore(&mut self) {
        for fighter in self.slots.iter_mut().flatten() {
            fighter.restore();
        }
    }

    /// Sum of clamped hp over all fighters
    pub fn alive_hp(&self) -> u64 {
        self.fighters().map(|(_, f)| f.current_hp()).sum()
    }

    pub fn is_defeated(&self) -> bool {
        self.alive_hp() == 0
    }

    pub fn alive_count(&self) -> usize {
        self.living().count()
    }

    /// Sum of `total_stats` over populated slots
    pub fn total_stats(&self) -> u64 {
        self.fighters().map(|(_, f)| f.total_stats()).sum()
    }

    /// Union of the types held by the fighters counted under `scope`
    pub fn types(&self, scope: TypeScope) -> BTreeSet<Type> {
        self.fighters()
            .filter(|(_, f)| scope == TypeScope::AllSlots || f.is_alive())
            .flat_map(|(_, f)| f.types().iter().copied())
            .collect()
    }

    /// Slot an attacker in `attacker_slot` should strike: the facing slot if that
    /// fighter is alive, otherwise the first living fighter.
    pub fn target_for(&self, attacker_slot: usize) -> Option<usize> {
        match self.get(attacker_slot) {
            Some(f) if f.is_alive() => Some(attacker_slot),
            _ => self.living().map(|(slot, _)| slot).next(),
        }
    }
}
