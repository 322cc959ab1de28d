use pokeduel_battle::BattleError;
use thiserror::Error;

/// Failures of a [`DataProvider`](crate::DataProvider)
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Enter a pokemon name or number")]
    EmptyQuery,

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failures while turning a name into a [`Fighter`](pokeduel_battle::Fighter)
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}
