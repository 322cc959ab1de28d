//! Query helpers for scoring rosters
//!
//! This module provides the type-advantage checks used by score resolution.

mod matchup;

pub use matchup::{
    ADVANTAGE_MULTIPLIER, ADVANTAGE_PERCENT, NEUTRAL_MULTIPLIER, NEUTRAL_PERCENT,
    advantage_multiplier, advantage_percent, compute_multiplier, compute_multiplier_with,
    compute_percent_with, has_advantage,
};
