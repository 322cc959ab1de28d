//! BattleSession - real-time damage exchange between two rosters

use crate::config::BattleConfig;
use crate::error::{BattleError, Result};
use crate::types::{Fighter, Roster, Side};

use super::event::{BattleEvent, FighterSnapshot, Strike, TickReport};
use super::outcome::{BattleResult, Outcome};
use super::rng::DamageRoller;
use super::score::{ScoreReport, resolve_by_score_with};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    Idle,
    Running,
    Finished(Outcome),
}

impl BattleState {
    pub fn name(&self) -> &'static str {
        match self {
            BattleState::Idle => "idle",
            BattleState::Running => "running",
            BattleState::Finished(_) => "finished",
        }
    }
}

/// One battle between side A and side B.
///
/// The session owns both rosters and only mutates hp inside [`BattleSession::tick`].
/// It has no notion of time: the host decides when to call `tick`, whether from a
/// timer or by stepping manually in tests.
pub struct BattleSession {
    rosters: [Roster; 2],
    config: BattleConfig,
    roller: Box<dyn DamageRoller>,
    state: BattleState,
    tick: u32,
}

impl BattleSession {
    /// Create a session with `roster_size` empty slots per side
    pub fn new(
        roster_size: usize,
        config: BattleConfig,
        roller: impl DamageRoller + 'static,
    ) -> Result<Self> {
        Self::with_rosters(
            Roster::new(roster_size),
            Roster::new(roster_size),
            config,
            roller,
        )
    }

    /// Create a session from existing rosters
    pub fn with_rosters(
        a: Roster,
        b: Roster,
        config: BattleConfig,
        roller: impl DamageRoller + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rosters: [a, b],
            config,
            roller: Box::new(roller),
            state: BattleState::Idle,
            tick: 0,
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == BattleState::Running
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, BattleState::Finished(_))
    }

    /// Ticks played since the last start
    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side.index()]
    }

    /// Whether both rosters are fully populated
    pub fn is_ready(&self) -> bool {
        self.rosters.iter().all(Roster::is_ready)
    }

    /// Assign a fighter to a slot. Not allowed mid-battle.
    pub fn assign(&mut self, side: Side, slot: usize, fighter: Fighter) -> Result<Option<Fighter>> {
        self.ensure_not_running()?;
        self.rosters[side.index()].assign(slot, fighter)
    }

    /// Empty a slot. Not allowed mid-battle.
    pub fn remove(&mut self, side: Side, slot: usize) -> Result<Option<Fighter>> {
        self.ensure_not_running()?;
        Ok(self.rosters[side.index()].remove(slot))
    }

    fn ensure_not_running(&self) -> Result<()> {
        if self.is_running() {
            return Err(BattleError::InvalidState {
                expected: "idle",
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    /// Score both rosters without playing out the battle
    pub fn resolve_by_score(&self) -> Result<ScoreReport> {
        resolve_by_score_with(&self.rosters[0], &self.rosters[1], self.config.type_scope)
    }

    /// Move from idle to running.
    ///
    /// Fails with `NotReady` for the first side holding an empty slot.
    pub fn start(&mut self) -> Result<Vec<BattleEvent>> {
        if self.state != BattleState::Idle {
            return Err(BattleError::InvalidState {
                expected: "idle",
                actual: self.state.name(),
            });
        }

        for side in Side::ALL {
            if !self.roster(side).is_ready() {
                return Err(BattleError::NotReady(side));
            }
        }

        for roster in &mut self.rosters {
            roster.restore();
        }
        self.tick = 0;
        self.state = BattleState::Running;

        let sizes = [self.rosters[0].size(), self.rosters[1].size()];
        tracing::info!(size_a = sizes[0], size_b = sizes[1], "Battle started");

        Ok(vec![BattleEvent::BattleStarted { sizes }])
    }

    /// Play one simultaneous exchange.
    ///
    /// Targets are picked and every roll drawn before any hp changes, so a fighter
    /// knocked out this tick still lands its own strike. Defeat is checked once, after
    /// all damage is applied.
    pub fn tick(&mut self) -> Result<TickReport> {
        if self.state != BattleState::Running {
            return Err(BattleError::InvalidState {
                expected: "running",
                actual: self.state.name(),
            });
        }
        self.tick += 1;

        let mut targets = Vec::new();
        for side in Side::ALL {
            let defending = self.roster(side.opponent());
            for (slot, _) in self.roster(side).living() {
                if let Some(target) = defending.target_for(slot) {
                    targets.push((side, slot, target));
                }
            }
        }

        let (min, max) = (self.config.min_damage, self.config.max_damage);
        let strikes: Vec<Strike> = targets
            .into_iter()
            .map(|(attacker, attacker_slot, target_slot)| Strike {
                attacker,
                attacker_slot,
                target_slot,
                damage: self.roller.roll(min, max),
            })
            .collect();

        for strike in &strikes {
            if let Some(target) =
                self.rosters[strike.defender().index()].get_mut(strike.target_slot)
            {
                target.take_damage(strike.damage);
            }
        }

        let mut events: Vec<BattleEvent> = strikes.iter().copied().map(BattleEvent::Hit).collect();

        let hp_a = self.rosters[0].alive_hp();
        let hp_b = self.rosters[1].alive_hp();
        tracing::debug!(tick = self.tick, strikes = strikes.len(), hp_a, hp_b, "Tick resolved");

        let outcome = if hp_a == 0 || hp_b == 0 {
            let outcome = Outcome::compare(hp_a, hp_b);
            self.state = BattleState::Finished(outcome);
            events.push(BattleEvent::Victory(outcome));
            tracing::info!(tick = self.tick, %outcome, "Battle finished");
            Some(outcome)
        } else {
            None
        };

        Ok(TickReport {
            tick: self.tick,
            strikes,
            snapshots: self.snapshots(),
            events,
            outcome,
        })
    }

    /// Display state of every fighter, side A first
    pub fn snapshots(&self) -> Vec<FighterSnapshot> {
        Side::ALL
            .into_iter()
            .flat_map(|side| {
                self.roster(side)
                    .fighters()
                    .map(move |(slot, f)| FighterSnapshot::of(side, slot, f))
            })
            .collect()
    }

    /// Final report, once finished
    pub fn result(&self) -> Option<BattleResult> {
        match self.state {
            BattleState::Finished(outcome) => Some(BattleResult {
                outcome,
                final_hp: [self.rosters[0].alive_hp(), self.rosters[1].alive_hp()],
                ticks: self.tick,
            }),
            _ => None,
        }
    }

    /// Back to idle from any state, with every fighter at full hp
    pub fn reset(&mut self) {
        for roster in &mut self.rosters {
            roster.restore();
        }
        tracing::debug!(from = self.state.name(), ticks = self.tick, "Battle reset");
        self.state = BattleState::Idle;
        self.tick = 0;
    }

    /// Reset and empty every slot, ready for new fighters
    pub fn clear(&mut self) {
        self.reset();
        for roster in &mut self.rosters {
            roster.reset();
        }
    }
}
