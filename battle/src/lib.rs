//! Roster model, type advantages and battle resolution for two-player duels.
//!
//! This crate is the deterministic core: it never fetches data, renders, or sleeps.
//!
//! # Overview
//!
//! `pokeduel-battle` sits between `pokeduel-protocol` (PokeAPI data) and the async client:
//!
//! ```text
//! pokeduel-protocol (PokeAPI wire format)
//!        │
//!        ▼
//! pokeduel-battle (rosters + resolution) ← THIS CRATE
//!        │
//!        ▼
//! pokeduel-client (data provider + tick scheduler)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Pokemon types with the advantage table
//! - [`BaseStats`] - The six base stats
//! - [`Fighter`] - One participant's combat snapshot
//! - [`Roster`] - One side's fighters, in fixed slots
//!
//! ## Resolution
//! - [`resolve_by_score`] - One-shot comparison of stat totals weighted by type advantage
//! - [`BattleSession`] - Real-time damage exchange, advanced one [`BattleSession::tick`] at a time
//! - [`DamageRoller`] - Injected source of damage rolls
//!
//! # Example Usage
//!
//! ```ignore
//! use pokeduel_battle::{BattleConfig, BattleSession, Fighter, SeededRoller, Side};
//!
//! let mut session = BattleSession::new(1, BattleConfig::default(), SeededRoller::new(7))?;
//! session.assign(Side::A, 0, charizard)?;
//! session.assign(Side::B, 0, venusaur)?;
//!
//! session.start()?;
//! while session.is_running() {
//!     let report = session.tick()?;
//!     println!("tick {}: A={} B={}", report.tick, report.alive_hp(Side::A), report.alive_hp(Side::B));
//! }
//! println!("{}", session.result().unwrap().outcome);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use config::{BattleConfig, TypeScope};
pub use engine::{
    BattleEvent, BattleResult, BattleSession, BattleState, DamageRoller, FighterSnapshot,
    Outcome, ScoreCard, ScoreReport, ScriptedRoller, SeededRoller, Strike, TickReport,
    resolve_by_score, resolve_by_score_with,
};
pub use error::BattleError;
pub use query::{compute_multiplier, compute_multiplier_with};
pub use types::{
    BaseStats, Fighter, HpBand, Roster, Side, TYPE_ADVANTAGES, Type, TypeAdvantageTable,
};

// Re-export commonly used protocol types
pub use pokeduel_protocol::{PokemonData, Stat};
