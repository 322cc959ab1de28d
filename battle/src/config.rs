//! Tunable battle parameters

use crate::error::{BattleError, Result};

/// Which fighters contribute their types to the advantage check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeScope {
    /// Only fighters with hp above zero
    #[default]
    LivingOnly,

    /// Every populated slot, fainted or not
    AllSlots,
}

/// Battle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Smallest damage a single strike can roll (inclusive)
    pub min_damage: u32,

    /// Largest damage a single strike can roll (inclusive)
    pub max_damage: u32,

    pub type_scope: TypeScope,
}

impl BattleConfig {
    pub const DEFAULT_MIN_DAMAGE: u32 = 8;
    pub const DEFAULT_MAX_DAMAGE: u32 = 25;

    pub fn new() -> Self {
        Self {
            min_damage: Self::DEFAULT_MIN_DAMAGE,
            max_damage: Self::DEFAULT_MAX_DAMAGE,
            type_scope: TypeScope::default(),
        }
    }

    /// Default config with a custom damage range
    pub fn with_damage_range(min_damage: u32, max_damage: u32) -> Result<Self> {
        let config = Self {
            min_damage,
            max_damage,
            ..Self::new()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_type_scope(mut self, type_scope: TypeScope) -> Self {
        self.type_scope = type_scope;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_damage > self.max_damage {
            return Err(BattleError::InvalidConfig(format!(
                "min_damage {} exceeds max_damage {}",
                self.min_damage, self.max_damage
            )));
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.min_damage, 8);
        assert_eq!(config.max_damage, 25);
        assert_eq!(config.type_scope, TypeScope::LivingOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_damage_range() {
        let config = BattleConfig::with_damage_range(5, 19).unwrap();
        assert_eq!((config.min_damage, config.max_damage), (5, 19));

        // Fixed damage is allowed
        assert!(BattleConfig::with_damage_range(10, 10).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = BattleConfig::with_damage_range(23, 5).unwrap_err();
        assert!(matches!(err, BattleError::InvalidConfig(_)));
    }
}
