//! Domain types for duels

mod fighter;
mod pokemon_type;
mod side;
mod stats;

pub use fighter::{Fighter, HpBand};
pub use pokemon_type::{TYPE_ADVANTAGES, Type, TypeAdvantageTable};
pub use side::{Roster, Side};
pub use stats::BaseStats;
