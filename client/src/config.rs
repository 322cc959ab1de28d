use std::time::Duration;

use pokeduel_protocol::POKEAPI_URL;

/// Settings for [`PokeApiClient`](crate::PokeApiClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without the `/pokemon` segment
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("pokeduel/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Default settings against another API root, e.g. a local mirror
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Settings for [`BattleRunner`](crate::BattleRunner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Delay between ticks. The first tick fires one interval after the start.
    pub tick_interval: Duration,
}

impl RunnerConfig {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(600);

    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }
}
