//! Pokemon types and the type-advantage table

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Defending types this type is strong against
    pub fn strong_against(&self) -> &'static [Type] {
        TYPE_ADVANTAGES[*self as usize]
    }

    /// Whether this type has the advantage over a defending type
    pub fn beats(&self, defender: Type) -> bool {
        self.strong_against().contains(&defender)
    }

    /// Parse from an API type name (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lookup by type name, for callers holding raw tags
pub struct TypeAdvantageTable;

impl TypeAdvantageTable {
    /// Defending types the named type is strong against.
    ///
    /// Unknown names have no advantages.
    pub fn lookup(name: &str) -> &'static [Type] {
        match Type::from_protocol(name) {
            Some(t) => t.strong_against(),
            None => &[],
        }
    }
}

use Type::*;

/// Attacking type (row, in [`Type::ALL`] order) to the defending types it is super effective against
#[rustfmt::skip]
pub static TYPE_ADVANTAGES: [&[Type]; 18] = [
    /* Normal   */ &[],
    /* Fire     */ &[Grass, Ice, Bug, Steel],
    /* Water    */ &[Fire, Ground, Rock],
    /* Electric */ &[Water, Flying],
    /* Grass    */ &[Water, Ground, Rock],
    /* Ice      */ &[Grass, Ground, Flying, Dragon],
    /* Fighting */ &[Normal, Ice, Rock, Dark, Steel],
    /* Poison   */ &[Grass, Fairy],
    /* Ground   */ &[Fire, Electric, Poison, Rock, Steel],
    /* Flying   */ &[Grass, Fighting, Bug],
    /* Psychic  */ &[Fighting, Poison],
    /* Bug      */ &[Grass, Psychic, Dark],
    /* Rock     */ &[Fire, Ice, Flying, Bug],
    /* Ghost    */ &[Psychic, Ghost],
    /* Dragon   */ &[Dragon],
    /* Dark     */ &[Psychic, Ghost],
    /* Steel    */ &[Ice, Rock, Fairy],
    /* Fairy    */ &[Fighting, Dragon, Dark],
];
