//! Fetch two pokemon and let them fight.
//!
//! cargo run -p pokeduel-client --example quick_battle -- pikachu 6

use anyhow::Result;
use pokeduel_battle::{
    BattleConfig, BattleResult, BattleSession, HpBand, SeededRoller, Side, Strike, TickReport,
};
use pokeduel_client::{
    BattleRunner, Handler, PokeApiClient, RunOutcome, RunnerConfig, fetch_fighter,
};
use tracing_subscriber::EnvFilter;

struct Commentator {
    names: [String; 2],
}

impl Handler for Commentator {
    async fn on_battle_start(&mut self, _sizes: [usize; 2]) {
        println!("{} vs {}!", self.names[0], self.names[1]);
    }

    async fn on_hit(&mut self, strike: &Strike) {
        println!(
            "  {} hits for {}",
            self.names[strike.attacker.index()],
            strike.damage
        );
    }

    async fn on_tick(&mut self, report: &TickReport) {
        let bars: Vec<String> = report
            .snapshots
            .iter()
            .map(|s| {
                let mark = match s.band {
                    HpBand::Healthy => "",
                    HpBand::Wounded => " (wounded)",
                    HpBand::Critical => " (critical)",
                };
                format!("{} {}/{}{}", s.name, s.hp, s.max_hp, mark)
            })
            .collect();
        println!("[tick {}] {}", report.tick, bars.join(" | "));
    }

    async fn on_victory(&mut self, result: &BattleResult) {
        let verdict = match result.outcome.winner() {
            Some(side) => format!("{} wins", self.names[side.index()]),
            None => "Draw".to_string(),
        };
        println!("{} after {} ticks", verdict, result.ticks);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "charizard".to_string());
    let second = args.next().unwrap_or_else(|| "blastoise".to_string());

    let api = PokeApiClient::new()?;
    let left = fetch_fighter(&api, &first).await?;
    let right = fetch_fighter(&api, &second).await?;
    let names = [left.name().to_string(), right.name().to_string()];

    let roller = SeededRoller::from_entropy();
    println!("seed {}", roller.initial_seed());

    let mut session = BattleSession::new(1, BattleConfig::default(), roller)?;
    session.assign(Side::A, 0, left)?;
    session.assign(Side::B, 0, right)?;

    let report = session.resolve_by_score()?;
    for side in Side::ALL {
        let card = report.card(side);
        println!(
            "{}: {} x {:.2} = {}",
            names[side.index()],
            card.raw,
            card.multiplier,
            card.final_score
        );
    }
    println!("By score: {}", report.outcome);

    let mut runner = BattleRunner::new(RunnerConfig::default());
    let mut commentator = Commentator { names };
    if let RunOutcome::Reset = runner.run(&mut session, &mut commentator).await? {
        println!("Battle was reset");
    }

    Ok(())
}
