mod stat;

pub use stat::Stat;

use crate::ParseError;
use anyhow::Result;
use serde::Deserialize;

/// Raw body of `GET /pokemon/{name or id}`, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub cries: Cries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: i32,
    #[serde(default)]
    pub effort: i32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

/// Flat record handed to the battle layer
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,

    /// Type names in slot order, as sent by the API (lower-case)
    pub types: Vec<String>,

    /// Base stats indexed by [`Stat::index`]
    pub stats: [i32; 6],

    pub image_url: Option<String>,
    pub cry_url: Option<String>,
}

impl PokemonData {
    /// Base value of a single stat
    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats[stat.index()]
    }
}

/// Parse a PokeAPI pokemon body into [`PokemonData`]
pub fn parse_pokemon(body: &str) -> Result<PokemonData> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyResponse.into());
    }

    let response: PokemonResponse = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    PokemonData::try_from(response)
}

impl TryFrom<PokemonResponse> for PokemonData {
    type Error = anyhow::Error;

    fn try_from(response: PokemonResponse) -> Result<Self> {
        let mut stats: [Option<i32>; 6] = [None; 6];
        for entry in &response.stats {
            let stat = Stat::from_api(&entry.stat.name)
                .ok_or_else(|| ParseError::UnknownStat(entry.stat.name.clone()))?;
            stats[stat.index()] = Some(entry.base_stat);
        }

        let mut values = [0; 6];
        for stat in Stat::ALL {
            values[stat.index()] = stats[stat.index()]
                .ok_or_else(|| ParseError::MissingField(format!("stats.{}", stat)))?;
        }

        let mut slots = response.types;
        slots.sort_by_key(|t| t.slot);
        let types = slots.into_iter().map(|t| t.kind.name).collect();

        // Older generations have no "latest" cry recorded
        let cry_url = response.cries.latest.or(response.cries.legacy);

        Ok(PokemonData {
            id: response.id,
            name: response.name,
            types,
            stats: values,
            image_url: response.sprites.front_default,
            cry_url,
        })
    }
}
