use pokeduel_battle::{BattleResult, Strike, TickReport};

/// Callbacks driven by [`BattleRunner`](crate::BattleRunner).
///
/// Every method has a no-op default, so implement only the events you care about.
/// Per tick the runner calls `on_hit` for each strike, then `on_tick`, then
/// `on_victory` if that tick ended the battle.
///
/// # Example
///
/// ```ignore
/// struct Printer;
///
/// impl Handler for Printer {
///     async fn on_victory(&mut self, result: &BattleResult) {
///         println!("{} after {} ticks", result.outcome, result.ticks);
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Handler: Send {
    /// Called once the session has started, with the roster size of each side
    async fn on_battle_start(&mut self, sizes: [usize; 2]) {
        let _ = sizes;
    }

    /// Called for each strike landed during a tick
    async fn on_hit(&mut self, strike: &Strike) {
        let _ = strike;
    }

    /// Called after each tick with the state of every fighter
    async fn on_tick(&mut self, report: &TickReport) {
        let _ = report;
    }

    /// Called when one side (or both) has no hp left
    async fn on_victory(&mut self, result: &BattleResult) {
        let _ = result;
    }

    /// Called after a reset stopped the battle and restored every fighter
    async fn on_reset(&mut self) {}
}

/// Handler that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl Handler for NoopHandler {}
