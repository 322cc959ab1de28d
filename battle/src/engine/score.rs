//! Score comparison: stat totals weighted by type advantage

use crate::config::TypeScope;
use crate::error::{BattleError, Result};
use crate::query::compute_percent_with;
use crate::types::{Roster, Side};

use super::outcome::Outcome;

/// One side's score breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    /// Sum of `total_stats` over the roster
    pub raw: u64,
    /// Multiplier in percent: 115 with type advantage, else 100
    pub percent: u64,
    /// `percent / 100`, for display
    pub multiplier: f64,
    /// `raw * multiplier`, rounded half away from zero
    pub final_score: u64,
}

impl ScoreCard {
    fn new(raw: u64, percent: u64) -> Self {
        Self {
            raw,
            percent,
            multiplier: percent as f64 / 100.0,
            // 1.15 has no exact f64 form; integer percent keeps halves rounding up
            final_score: (raw * percent + 50) / 100,
        }
    }
}

/// Both score cards and the verdict
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    pub cards: [ScoreCard; 2],
    pub outcome: Outcome,
}

impl ScoreReport {
    pub fn card(&self, side: Side) -> &ScoreCard {
        &self.cards[side.index()]
    }
}

/// Decide a winner from stat totals, counting living fighters' types
pub fn resolve_by_score(a: &Roster, b: &Roster) -> Result<ScoreReport> {
    resolve_by_score_with(a, b, TypeScope::LivingOnly)
}

/// Decide a winner from stat totals with an explicit [`TypeScope`].
///
/// Fails with `NotReady` if either roster has an empty slot. Equal final scores are a draw.
pub fn resolve_by_score_with(a: &Roster, b: &Roster, scope: TypeScope) -> Result<ScoreReport> {
    if !a.is_ready() {
        return Err(BattleError::NotReady(Side::A));
    }
    if !b.is_ready() {
        return Err(BattleError::NotReady(Side::B));
    }

    let card_a = ScoreCard::new(a.total_stats(), compute_percent_with(a, b, scope));
    let card_b = ScoreCard::new(b.total_stats(), compute_percent_with(b, a, scope));
    let outcome = Outcome::compare(card_a.final_score, card_b.final_score);

    tracing::debug!(
        raw_a = card_a.raw,
        raw_b = card_b.raw,
        final_a = card_a.final_score,
        final_b = card_b.final_score,
        %outcome,
        "Resolved by score"
    );

    Ok(ScoreReport {
        cards: [card_a, card_b],
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Fighter, Type};

    /// Single-fighter roster whose stats sum to `total`
    fn solo(t: Type, total: i32) -> Roster {
        let per = total / 6;
        let stats = BaseStats::from_array([per, per, per, per, per, total - per * 5]);
        let mut roster = Roster::singles();
        roster
            .assign(0, Fighter::new(t.as_str(), vec![t], stats).unwrap())
            .unwrap();
        roster
    }

    #[test]
    fn test_fire_beats_grass_on_equal_totals() {
        let report = resolve_by_score(&solo(Type::Fire, 300), &solo(Type::Grass, 300)).unwrap();

        assert_eq!(report.card(Side::A).multiplier, 1.15);
        assert_eq!(report.card(Side::A).final_score, 345);
        assert_eq!(report.card(Side::B).multiplier, 1.0);
        assert_eq!(report.card(Side::B).final_score, 300);
        assert_eq!(report.outcome, Outcome::Win(Side::A));
    }

    #[test]
    fn test_swapping_sides_mirrors_outcome() {
        let fire = solo(Type::Fire, 300);
        let grass = solo(Type::Grass, 300);

        let forward = resolve_by_score(&fire, &grass).unwrap();
        let backward = resolve_by_score(&grass, &fire).unwrap();
        assert_eq!(backward.outcome, forward.outcome.mirrored());
        assert_eq!(backward.outcome, Outcome::Win(Side::B));
    }

    #[test]
    fn test_equal_scores_draw() {
        let a = solo(Type::Normal, 480);
        let b = solo(Type::Psychic, 480);

        assert_eq!(resolve_by_score(&a, &b).unwrap().outcome, Outcome::Draw);
        assert_eq!(resolve_by_score(&b, &a).unwrap().outcome, Outcome::Draw);
    }

    #[test]
    fn test_advantage_can_lose_to_raw_stats() {
        // 400 * 1.15 = 460 < 500
        let report = resolve_by_score(&solo(Type::Water, 400), &solo(Type::Fire, 500)).unwrap();
        assert_eq!(report.card(Side::A).final_score, 460);
        assert_eq!(report.outcome, Outcome::Win(Side::B));
    }

    #[test]
    fn test_rounding() {
        // 311 * 1.15 = 357.65
        let report = resolve_by_score(&solo(Type::Fire, 311), &solo(Type::Grass, 600)).unwrap();
        assert_eq!(report.card(Side::A).final_score, 358);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 350 * 1.15 = 402.5
        let fire = BaseStats::from_array([60, 60, 60, 60, 60, 50]);
        let mut a = Roster::singles();
        a.assign(0, Fighter::new("fire", vec![Type::Fire], fire).unwrap())
            .unwrap();
        let b = solo(Type::Grass, 403);

        let report = resolve_by_score(&a, &b).unwrap();
        assert_eq!(report.card(Side::A).raw, 350);
        assert_eq!(report.card(Side::A).percent, 115);
        assert_eq!(report.card(Side::A).final_score, 403);
        assert_eq!(report.card(Side::B).final_score, 403);
        assert_eq!(report.outcome, Outcome::Draw);
    }

    #[test]
    fn test_halves_across_common_totals() {
        // Each of these lands on .5 exactly
        let cases = [
            (50, 58),
            (90, 104),
            (170, 196),
            (330, 380),
            (890, 1024),
            (1570, 1806),
        ];
        for (raw, expected) in cases {
            let report = resolve_by_score(&solo(Type::Fire, raw), &solo(Type::Grass, 600)).unwrap();
            assert_eq!(report.card(Side::A).final_score, expected, "raw {}", raw);
        }
    }

    #[test]
    fn test_doubles_sum_totals() {
        let mut a = Roster::doubles();
        let mut b = Roster::doubles();
        for slot in 0..2 {
            let stats = BaseStats::from_array([50, 50, 50, 50, 50, 50]);
            a.assign(slot, Fighter::new("a", vec![Type::Normal], stats).unwrap())
                .unwrap();
            b.assign(slot, Fighter::new("b", vec![Type::Normal], stats).unwrap())
                .unwrap();
        }
        b.get_mut(1)
            .unwrap()
            .set_stats(BaseStats::from_array([51, 50, 50, 50, 50, 50]))
            .unwrap();

        let report = resolve_by_score(&a, &b).unwrap();
        assert_eq!(report.card(Side::A).raw, 600);
        assert_eq!(report.card(Side::B).raw, 601);
        assert_eq!(report.outcome, Outcome::Win(Side::B));
    }

    #[test]
    fn test_not_ready() {
        let full = solo(Type::Fire, 300);
        let empty = Roster::singles();

        assert_eq!(
            resolve_by_score(&empty, &full).unwrap_err(),
            BattleError::NotReady(Side::A)
        );
        assert_eq!(
            resolve_by_score(&full, &empty).unwrap_err(),
            BattleError::NotReady(Side::B)
        );
    }

    #[test]
    fn test_deterministic() {
        let a = solo(Type::Ice, 420);
        let b = solo(Type::Dragon, 410);
        let first = resolve_by_score(&a, &b).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_by_score(&a, &b).unwrap(), first);
        }
    }
}
