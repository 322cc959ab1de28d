use thiserror::Error;

pub mod request;
pub mod response;

pub use request::{POKEAPI_URL, PokemonQuery};
pub use response::{PokemonData, Stat, parse_pokemon};

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    #[error("Empty response")]
    EmptyResponse,
}
