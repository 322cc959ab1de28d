//! Battle resolution: score comparison and real-time damage exchange

mod event;
mod outcome;
mod rng;
mod score;
mod session;

pub use event::{BattleEvent, FighterSnapshot, Strike, TickReport};
pub use outcome::{BattleResult, Outcome};
pub use rng::{DamageRoller, ScriptedRoller, SeededRoller};
pub use score::{ScoreCard, ScoreReport, resolve_by_score, resolve_by_score_with};
pub use session::{BattleSession, BattleState};
