use std::future::Future;

use pokeduel_battle::Fighter;
use pokeduel_protocol::{PokemonData, PokemonQuery, parse_pokemon};
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::error::{FetchError, ProviderError};

/// Source of pokemon data.
///
/// One request per call: no retries, no partial results.
pub trait DataProvider {
    fn fetch(
        &self,
        query: &PokemonQuery,
    ) -> impl Future<Output = Result<PokemonData, ProviderError>> + Send;
}

/// Fetch by raw user input (trimmed, lower-cased; numbers are dex ids)
pub async fn fetch_by_input<P: DataProvider>(
    provider: &P,
    input: &str,
) -> Result<PokemonData, ProviderError> {
    let query = PokemonQuery::parse(input).ok_or(ProviderError::EmptyQuery)?;
    provider.fetch(&query).await
}

/// Fetch by raw user input and build a fighter from the result
pub async fn fetch_fighter<P: DataProvider>(provider: &P, input: &str) -> Result<Fighter, FetchError> {
    let data = fetch_by_input(provider, input).await?;
    Ok(Fighter::from_protocol(&data)?)
}

/// [`DataProvider`] backed by PokeAPI over HTTP
#[derive(Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl DataProvider for PokeApiClient {
    async fn fetch(&self, query: &PokemonQuery) -> Result<PokemonData, ProviderError> {
        let url = query.to_url(&self.base_url);
        tracing::debug!(%url, "Fetching pokemon");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(query.to_string()));
        }

        let body = response.error_for_status()?.text().await?;

        parse_pokemon(&body).map_err(|e| {
            tracing::warn!(%query, error = %e, "Malformed pokemon response");
            ProviderError::InvalidResponse(e.to_string())
        })
    }
}
