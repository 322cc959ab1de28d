//! Async host for pokeduel battles.
//!
//! - [`DataProvider`] / [`PokeApiClient`] look pokemon up by name or dex number
//! - [`BattleRunner`] ticks a [`BattleSession`](pokeduel_battle::BattleSession) on a
//!   timer and reports to a [`Handler`]
//!
//! ```ignore
//! let api = PokeApiClient::new()?;
//! let mut session = BattleSession::new(1, BattleConfig::default(), SeededRoller::from_entropy())?;
//! session.assign(Side::A, 0, fetch_fighter(&api, "charizard").await?)?;
//! session.assign(Side::B, 0, fetch_fighter(&api, "blastoise").await?)?;
//!
//! let mut runner = BattleRunner::new(RunnerConfig::default());
//! let outcome = runner.run(&mut session, &mut NoopHandler).await?;
//! ```

mod config;
mod error;
mod handler;
mod provider;
mod runner;

pub use config::{ClientConfig, RunnerConfig};
pub use error::{FetchError, ProviderError};
pub use handler::{Handler, NoopHandler};
pub use provider::{DataProvider, PokeApiClient, fetch_by_input, fetch_fighter};
pub use runner::{BattleRunner, RunOutcome, RunnerHandle};

pub use pokeduel_protocol::{POKEAPI_URL, PokemonData, PokemonQuery};
