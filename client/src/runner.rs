use anyhow::{Context, Result, anyhow};
use pokeduel_battle::{BattleEvent, BattleResult, BattleSession};
use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use crate::config::RunnerConfig;
use crate::handler::Handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunnerCommand {
    Reset,
}

/// How a call to [`BattleRunner::run`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Finished(BattleResult),
    Reset,
}

/// Cloneable control handle for a [`BattleRunner`].
///
/// Safe to use from handlers and other tasks while a battle is running.
#[derive(Debug, Clone)]
pub struct RunnerHandle {
    tx: mpsc::UnboundedSender<RunnerCommand>,
}

impl RunnerHandle {
    /// Stop the current battle and restore every fighter.
    ///
    /// No tick fires after the reset is observed. A reset sent while no battle is
    /// running is discarded by the next [`BattleRunner::run`].
    pub fn reset(&self) -> Result<()> {
        self.tx
            .send(RunnerCommand::Reset)
            .map_err(|_| anyhow!("Battle runner has been dropped"))
    }
}

/// Drives a [`BattleSession`] on a fixed-interval timer
pub struct BattleRunner {
    config: RunnerConfig,
    tx: mpsc::UnboundedSender<RunnerCommand>,
    rx: mpsc::UnboundedReceiver<RunnerCommand>,
}

impl BattleRunner {
    pub fn new(mut config: RunnerConfig) -> Self {
        // tokio intervals panic on a zero period
        if config.tick_interval.is_zero() {
            tracing::warn!("Tick interval of zero raised to 1ms");
            config.tick_interval = Duration::from_millis(1);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        Self { config, tx, rx }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn handle(&self) -> RunnerHandle {
        RunnerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Start the session and tick it until the battle ends or a reset arrives.
    ///
    /// Fails without calling the handler if the session cannot start, e.g. when a
    /// roster still has an empty slot. Dropping the returned future mid-battle resets
    /// the session, so it can be run again.
    pub async fn run<H: Handler>(
        &mut self,
        session: &mut BattleSession,
        handler: &mut H,
    ) -> Result<RunOutcome> {
        while self.rx.try_recv().is_ok() {}

        let events = session.start().context("Failed to start battle")?;
        let mut guard = ResetOnDrop { session };
        for event in &events {
            if let BattleEvent::BattleStarted { sizes } = event {
                handler.on_battle_start(*sizes).await;
            }
        }

        let period = self.config.tick_interval;
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                Some(command) = self.rx.recv() => match command {
                    RunnerCommand::Reset => {
                        drop(interval);
                        guard.session.reset();
                        tracing::info!("Battle reset");
                        handler.on_reset().await;
                        return Ok(RunOutcome::Reset);
                    }
                },

                _ = interval.tick() => {}
            }

            let report = guard.session.tick().context("Battle tick failed")?;

            for strike in &report.strikes {
                handler.on_hit(strike).await;
            }
            handler.on_tick(&report).await;

            if report.outcome.is_some() {
                let result = guard
                    .session
                    .result()
                    .ok_or_else(|| anyhow!("Battle ended without a result"))?;
                handler.on_victory(&result).await;
                return Ok(RunOutcome::Finished(result));
            }
        }
    }
}

/// Puts a session that is still running back to idle when a run is abandoned
struct ResetOnDrop<'a> {
    session: &'a mut BattleSession,
}

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        if self.session.is_running() {
            tracing::debug!(
                ticks = self.session.tick_count(),
                "Run abandoned, resetting battle"
            );
            self.session.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use pokeduel_battle::{
        BaseStats, BattleConfig, BattleError, BattleState, Fighter, Outcome, ScriptedRoller,
        Side, Strike, TickReport, Type,
    };

    use super::*;

    fn fighter(name: &str, hp: i32) -> Fighter {
        Fighter::new(name, vec![Type::Normal], BaseStats::from_array([hp, 50, 50, 50, 50, 50]))
            .unwrap()
    }

    fn session(hp_a: i32, hp_b: i32, rolls: Vec<u32>) -> BattleSession {
        let mut session =
            BattleSession::new(1, BattleConfig::default(), ScriptedRoller::new(rolls)).unwrap();
        session.assign(Side::A, 0, fighter("left", hp_a)).unwrap();
        session.assign(Side::B, 0, fighter("right", hp_b)).unwrap();
        session
    }

    #[derive(Default)]
    struct Recorder {
        started: Vec<[usize; 2]>,
        hits: Vec<Strike>,
        ticks: Vec<u32>,
        victory: Option<BattleResult>,
        resets: usize,
        reset_on_tick: Option<(u32, RunnerHandle)>,
    }

    impl Handler for Recorder {
        async fn on_battle_start(&mut self, sizes: [usize; 2]) {
            self.started.push(sizes);
        }

        async fn on_hit(&mut self, strike: &Strike) {
            self.hits.push(*strike);
        }

        async fn on_tick(&mut self, report: &TickReport) {
            self.ticks.push(report.tick);
            if let Some((tick, handle)) = &self.reset_on_tick {
                if report.tick == *tick {
                    handle.reset().unwrap();
                }
            }
        }

        async fn on_victory(&mut self, result: &BattleResult) {
            self.victory = Some(result.clone());
        }

        async fn on_reset(&mut self) {
            self.resets += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_to_victory() {
        let mut session = session(30, 20, vec![10, 10, 10, 10]);
        let mut runner = BattleRunner::new(RunnerConfig::default());
        let mut recorder = Recorder::default();

        let start = Instant::now();
        let outcome = runner.run(&mut session, &mut recorder).await.unwrap();

        assert!(start.elapsed() >= RunnerConfig::DEFAULT_TICK_INTERVAL * 2);

        let RunOutcome::Finished(result) = outcome else {
            panic!("expected the battle to finish");
        };
        assert_eq!(result.outcome, Outcome::Win(Side::A));
        assert_eq!(result.final_hp, [10, 0]);
        assert_eq!(result.ticks, 2);

        assert_eq!(recorder.started, vec![[1, 1]]);
        assert_eq!(recorder.ticks, vec![1, 2]);
        assert_eq!(recorder.hits.len(), 4);
        assert_eq!(recorder.hits[0].attacker, Side::A);
        assert_eq!(recorder.hits[1].attacker, Side::B);
        assert_eq!(recorder.victory, Some(result));
        assert_eq!(recorder.resets, 0);
        assert!(session.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_stops_ticks() {
        let mut session = session(500, 500, vec![10; 100]);
        let mut runner = BattleRunner::new(RunnerConfig::default());
        let mut recorder = Recorder {
            reset_on_tick: Some((2, runner.handle())),
            ..Recorder::default()
        };

        let outcome = runner.run(&mut session, &mut recorder).await.unwrap();
        assert_eq!(outcome, RunOutcome::Reset);

        time::sleep(RunnerConfig::DEFAULT_TICK_INTERVAL * 10).await;

        assert_eq!(recorder.ticks, vec![1, 2]);
        assert_eq!(recorder.resets, 1);
        assert!(recorder.victory.is_none());
        assert_eq!(session.state(), BattleState::Idle);
        assert_eq!(session.tick_count(), 0);
        for side in Side::ALL {
            assert_eq!(session.roster(side).alive_hp(), 500);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_from_another_task() {
        let mut session = session(500, 500, vec![10; 100]);
        let mut runner = BattleRunner::new(RunnerConfig::with_tick_interval(
            Duration::from_millis(100),
        ));
        let handle = runner.handle();

        tokio::spawn(async move {
            time::sleep(Duration::from_millis(350)).await;
            handle.reset().unwrap();
        });

        let mut recorder = Recorder::default();
        let outcome = runner.run(&mut session, &mut recorder).await.unwrap();

        assert_eq!(outcome, RunOutcome::Reset);
        assert_eq!(recorder.ticks, vec![1, 2, 3]);
        assert_eq!(session.state(), BattleState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reset_is_discarded() {
        let mut session = session(30, 20, vec![10, 10, 10, 10]);
        let mut runner = BattleRunner::new(RunnerConfig::default());
        runner.handle().reset().unwrap();

        let outcome = runner
            .run(&mut session, &mut Recorder::default())
            .await
            .unwrap();
        assert!(matches!(outcome, RunOutcome::Finished(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_not_ready() {
        let mut session =
            BattleSession::new(1, BattleConfig::default(), ScriptedRoller::new([])).unwrap();
        session.assign(Side::A, 0, fighter("left", 30)).unwrap();

        let mut runner = BattleRunner::new(RunnerConfig::default());
        let mut recorder = Recorder::default();
        let err = runner.run(&mut session, &mut recorder).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<BattleError>(),
            Some(&BattleError::NotReady(Side::B))
        );
        assert!(recorder.started.is_empty());
        assert_eq!(session.state(), BattleState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_reusable_after_reset() {
        let mut session = session(30, 20, vec![10; 20]);
        let mut runner = BattleRunner::new(RunnerConfig::default());
        let mut recorder = Recorder {
            reset_on_tick: Some((1, runner.handle())),
            ..Recorder::default()
        };

        assert_eq!(
            runner.run(&mut session, &mut recorder).await.unwrap(),
            RunOutcome::Reset
        );

        recorder.reset_on_tick = None;
        let outcome = runner.run(&mut session, &mut recorder).await.unwrap();
        let RunOutcome::Finished(result) = outcome else {
            panic!("expected the battle to finish");
        };
        assert_eq!(result.ticks, 2);
        assert_eq!(result.outcome, Outcome::Win(Side::A));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_run_resets_session() {
        let mut session = session(500, 500, vec![10; 100]);
        let mut runner = BattleRunner::new(RunnerConfig::default());
        let mut recorder = Recorder::default();

        let abandoned = time::timeout(
            Duration::from_millis(1300),
            runner.run(&mut session, &mut recorder),
        )
        .await;
        assert!(abandoned.is_err());
        assert_eq!(recorder.ticks, vec![1, 2]);

        assert_eq!(session.state(), BattleState::Idle);
        assert_eq!(session.tick_count(), 0);
        for side in Side::ALL {
            assert_eq!(session.roster(side).alive_hp(), 500);
        }

        recorder.reset_on_tick = Some((1, runner.handle()));
        let outcome = runner.run(&mut session, &mut recorder).await.unwrap();
        assert_eq!(outcome, RunOutcome::Reset);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let runner = BattleRunner::new(RunnerConfig::with_tick_interval(Duration::ZERO));
        assert_eq!(runner.config().tick_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_handle_after_drop() {
        let runner = BattleRunner::new(RunnerConfig::default());
        let handle = runner.handle();
        drop(runner);
        assert!(handle.reset().is_err());
    }
}
