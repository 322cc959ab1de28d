//! Errors raised by the roster model and the resolution engine

use pokeduel_protocol::Stat;
use thiserror::Error;

use crate::types::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Invalid stats: {stat} is {value}, stats must be non-negative")]
    InvalidStats { stat: Stat, value: i32 },

    #[error("Side {0} is not ready: every roster slot needs a fighter")]
    NotReady(Side),

    #[error("Slot {slot} is out of range for a roster of {size}")]
    InvalidSlot { slot: usize, size: usize },

    #[error("Battle is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BattleError>;
