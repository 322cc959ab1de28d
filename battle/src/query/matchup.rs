//! Type-advantage scoring between rosters

use crate::config::TypeScope;
use crate::types::{Roster, Type};

/// Score multiplier for a side holding the type advantage
pub const ADVANTAGE_MULTIPLIER: f64 = 1.15;

/// Score multiplier without advantage
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// [`ADVANTAGE_MULTIPLIER`] in percent, for exact integer scoring
pub const ADVANTAGE_PERCENT: u64 = 115;

/// [`NEUTRAL_MULTIPLIER`] in percent
pub const NEUTRAL_PERCENT: u64 = 100;

/// Check if any attacking type is strong against any defending type
pub fn has_advantage<'a, A, D>(attacking_types: A, defending_types: D) -> bool
where
    A: IntoIterator<Item = &'a Type>,
    D: IntoIterator<Item = &'a Type> + Clone,
{
    attacking_types.into_iter().any(|attacker| {
        defending_types
            .clone()
            .into_iter()
            .any(|defender| attacker.beats(*defender))
    })
}

/// Multiplier in percent for a set of attacking types against a set of defending types
pub fn advantage_percent<'a, A, D>(attacking_types: A, defending_types: D) -> u64
where
    A: IntoIterator<Item = &'a Type>,
    D: IntoIterator<Item = &'a Type> + Clone,
{
    if has_advantage(attacking_types, defending_types) {
        ADVANTAGE_PERCENT
    } else {
        NEUTRAL_PERCENT
    }
}

/// Multiplier for a set of attacking types against a set of defending types
pub fn advantage_multiplier<'a, A, D>(attacking_types: A, defending_types: D) -> f64
where
    A: IntoIterator<Item = &'a Type>,
    D: IntoIterator<Item = &'a Type> + Clone,
{
    advantage_percent(attacking_types, defending_types) as f64 / 100.0
}

/// Multiplier for `attacking` against `defending`, counting only living fighters
pub fn compute_multiplier(attacking: &Roster, defending: &Roster) -> f64 {
    compute_multiplier_with(attacking, defending, TypeScope::LivingOnly)
}

/// Multiplier for `attacking` against `defending` with an explicit [`TypeScope`]
pub fn compute_multiplier_with(attacking: &Roster, defending: &Roster, scope: TypeScope) -> f64 {
    compute_percent_with(attacking, defending, scope) as f64 / 100.0
}

/// Same as [`compute_multiplier_with`], in percent
pub fn compute_percent_with(attacking: &Roster, defending: &Roster, scope: TypeScope) -> u64 {
    advantage_percent(&attacking.types(scope), &defending.types(scope))
}
