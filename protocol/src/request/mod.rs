/// Base URL of the public PokeAPI (v2)
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// What to ask the data provider for: a pokemon by name or by national dex id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonQuery {
    /// Lower-case species name, e.g. "charizard"
    Name(String),

    /// National dex number
    Id(u32),
}

impl PokemonQuery {
    /// Normalize user input into a query.
    ///
    /// Input is trimmed and lower-cased. Purely numeric input becomes an id lookup.
    /// Returns `None` for empty input, since the API would answer with the full listing.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        match normalized.parse::<u32>() {
            Ok(id) => Some(Self::Id(id)),
            Err(_) => Some(Self::Name(normalized)),
        }
    }

    /// Path segment relative to the API root: pokemon/NAME or pokemon/ID
    pub fn to_path(&self) -> String {
        match self {
            Self::Name(name) => format!("pokemon/{}", name),
            Self::Id(id) => format!("pokemon/{}", id),
        }
    }

    /// Full request URL against a base such as [`POKEAPI_URL`]
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.to_path())
    }
}

impl std::fmt::Display for PokemonQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_is_normalized() {
        assert_eq!(
            PokemonQuery::parse("  Pikachu "),
            Some(PokemonQuery::Name("pikachu".into()))
        );
    }

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(PokemonQuery::parse("25"), Some(PokemonQuery::Id(25)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PokemonQuery::parse(""), None);
        assert_eq!(PokemonQuery::parse("   "), None);
    }

    #[test]
    fn test_to_url() {
        let query = PokemonQuery::Name("mr-mime".into());
        assert_eq!(
            query.to_url(POKEAPI_URL),
            "https://pokeapi.co/api/v2/pokemon/mr-mime"
        );
        assert_eq!(
            PokemonQuery::Id(6).to_url("http://localhost:8080/"),
            "http://localhost:8080/pokemon/6"
        );
    }
}
