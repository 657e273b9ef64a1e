//! Scoring and round bookkeeping

use serde::{Deserialize, Serialize};

use super::bow::BowMode;

/// Scoring band a shot landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitType {
    Bullseye,
    Inner,
    Middle,
    Outer,
    Miss,
}

impl HitType {
    pub fn score(&self) -> u32 {
        match self {
            HitType::Bullseye => 10,
            HitType::Inner => 7,
            HitType::Middle => 5,
            HitType::Outer => 2,
            HitType::Miss => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HitType::Bullseye => "bullseye",
            HitType::Inner => "inner",
            HitType::Middle => "middle",
            HitType::Outer => "outer",
            HitType::Miss => "miss",
        }
    }
}

impl std::fmt::Display for HitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inner tiers, innermost first: (max distance inclusive, tier).
/// Anything else on the face is an outer hit.
const INNER_TIERS: [(f32, HitType); 3] = [
    (20.0, HitType::Bullseye),
    (40.0, HitType::Inner),
    (65.0, HitType::Middle),
];

/// Ring radii drawn on the target face, outermost first. The 80 ring is
/// decoration only; it does not split a scoring tier.
pub const TARGET_RING_RADII: [f32; 5] = [100.0, 80.0, 65.0, 40.0, 20.0];

/// Classify a hit by distance from the bullseye.
///
/// Boundaries are inclusive. Callers only raise a hit within the target
/// radius, so everything past the middle tier is outer, including the edge
/// itself.
pub fn resolve_hit(distance: f32) -> (u32, HitType) {
    let hit_type = INNER_TIERS
        .iter()
        .find(|(max, _)| distance <= *max)
        .map(|&(_, tier)| tier)
        .unwrap_or(HitType::Outer);
    (hit_type.score(), hit_type)
}

pub fn resolve_miss() -> (u32, HitType) {
    (0, HitType::Miss)
}

/// One resolved shot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub score: u32,
    pub hit_type: HitType,
    pub bow_mode: BowMode,
    /// 1-based shot index within the round
    pub shot_number: u32,
}

impl ShotRecord {
    /// History line, e.g. "Shot 2: 7 pts (INNER) - Power Bow"
    pub fn summary(&self) -> String {
        format!(
            "Shot {}: {} pts ({}) - {} Bow",
            self.shot_number,
            self.score,
            self.hit_type.as_str().to_uppercase(),
            self.bow_mode
        )
    }
}

/// End-of-round verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalRating {
    MasterArcher,
    GreatShooting,
    NotBad,
    BetterLuck,
}

impl FinalRating {
    pub fn for_score(total: u32) -> Self {
        match total {
            25.. => FinalRating::MasterArcher,
            15.. => FinalRating::GreatShooting,
            5.. => FinalRating::NotBad,
            _ => FinalRating::BetterLuck,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FinalRating::MasterArcher => "Excellent! Master Archer!",
            FinalRating::GreatShooting => "Great shooting!",
            FinalRating::NotBad => "Not bad, keep practicing!",
            FinalRating::BetterLuck => "Better luck next time!",
        }
    }
}

/// Score, shots and history for the current round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Shots granted per round
    pub initial_shots: u32,
    pub shots_remaining: u32,
    pub total_score: u32,
    pub history: Vec<ShotRecord>,
    /// True exactly when no shots remain
    pub game_over: bool,
}

impl Scoreboard {
    pub fn new(initial_shots: u32) -> Self {
        Self {
            initial_shots,
            shots_remaining: initial_shots,
            total_score: 0,
            history: Vec::with_capacity(initial_shots as usize),
            game_over: initial_shots == 0,
        }
    }

    /// Back to a fresh round
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_shots);
    }

    /// Append a shot, consume one shot, and end the round on the last one.
    /// Returns the new record, or None if the round was already over.
    pub fn record_shot(
        &mut self,
        score: u32,
        hit_type: HitType,
        bow_mode: BowMode,
    ) -> Option<&ShotRecord> {
        if self.game_over || self.shots_remaining == 0 {
            log::warn!("Shot recorded after round ended - ignored");
            return None;
        }

        let record = ShotRecord {
            score,
            hit_type,
            bow_mode,
            shot_number: self.initial_shots - self.shots_remaining + 1,
        };
        self.total_score += score;
        self.shots_remaining -= 1;
        self.history.push(record);

        if self.shots_remaining == 0 {
            self.game_over = true;
            log::info!("Round over: final score {}", self.total_score);
        }

        self.history.last()
    }

    pub fn last_shot(&self) -> Option<&ShotRecord> {
        self.history.last()
    }

    /// Rating for the current total (meaningful once the round is over)
    pub fn rating(&self) -> FinalRating {
        FinalRating::for_score(self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(resolve_hit(0.0), (10, HitType::Bullseye));
        assert_eq!(resolve_hit(20.0), (10, HitType::Bullseye));
        assert_eq!(resolve_hit(20.0001), (7, HitType::Inner));
        assert_eq!(resolve_hit(40.0), (7, HitType::Inner));
        assert_eq!(resolve_hit(40.0001), (5, HitType::Middle));
        assert_eq!(resolve_hit(65.0), (5, HitType::Middle));
        assert_eq!(resolve_hit(65.0001), (2, HitType::Outer));
        assert_eq!(resolve_hit(100.0), (2, HitType::Outer));
    }

    #[test]
    fn test_miss() {
        assert_eq!(resolve_miss(), (0, HitType::Miss));
    }

    #[test]
    fn test_record_shot_bookkeeping() {
        let mut board = Scoreboard::new(3);
        let rec = board.record_shot(10, HitType::Bullseye, BowMode::Precision).unwrap();
        assert_eq!(rec.shot_number, 1);
        assert_eq!(board.shots_remaining, 2);
        assert_eq!(board.total_score, 10);
        assert!(!board.game_over);

        board.record_shot(7, HitType::Inner, BowMode::Power);
        let rec = board.record_shot(0, HitType::Miss, BowMode::Standard).unwrap();
        assert_eq!(rec.shot_number, 3);
        assert_eq!(board.shots_remaining, 0);
        assert_eq!(board.total_score, 17);
        assert!(board.game_over);
        assert_eq!(board.rating(), FinalRating::GreatShooting);
    }

    #[test]
    fn test_record_after_game_over_ignored() {
        let mut board = Scoreboard::new(1);
        board.record_shot(2, HitType::Outer, BowMode::Standard);
        assert!(board.game_over);
        assert!(board.record_shot(10, HitType::Bullseye, BowMode::Standard).is_none());
        assert_eq!(board.shots_remaining, 0);
        assert_eq!(board.total_score, 2);
        assert_eq!(board.history.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut board = Scoreboard::new(3);
        board.record_shot(5, HitType::Middle, BowMode::Standard);
        board.reset();
        assert_eq!(board, Scoreboard::new(3));
        assert!(board.last_shot().is_none());
    }

    #[test]
    fn test_summary_line() {
        let rec = ShotRecord {
            score: 7,
            hit_type: HitType::Inner,
            bow_mode: BowMode::Power,
            shot_number: 2,
        };
        assert_eq!(rec.summary(), "Shot 2: 7 pts (INNER) - Power Bow");
    }

    #[test]
    fn test_final_rating_thresholds() {
        assert_eq!(FinalRating::for_score(30), FinalRating::MasterArcher);
        assert_eq!(FinalRating::for_score(25), FinalRating::MasterArcher);
        assert_eq!(FinalRating::for_score(24), FinalRating::GreatShooting);
        assert_eq!(FinalRating::for_score(15), FinalRating::GreatShooting);
        assert_eq!(FinalRating::for_score(14), FinalRating::NotBad);
        assert_eq!(FinalRating::for_score(5), FinalRating::NotBad);
        assert_eq!(FinalRating::for_score(4), FinalRating::BetterLuck);
        assert_eq!(FinalRating::for_score(0).message(), "Better luck next time!");
    }

    proptest! {
        #[test]
        fn prop_tiers_are_monotonic(a in 0.0f32..=100.0, b in 0.0f32..=100.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(resolve_hit(near).0 >= resolve_hit(far).0);
        }

        #[test]
        fn prop_hit_scores_in_set(d in 0.0f32..=100.0) {
            let (score, hit_type) = resolve_hit(d);
            prop_assert!([2, 5, 7, 10].contains(&score));
            prop_assert_ne!(hit_type, HitType::Miss);
            prop_assert_eq!(score, hit_type.score());
        }

        #[test]
        fn prop_total_is_sum_and_shots_decrease(
            shots in proptest::collection::vec(prop_oneof![
                Just(HitType::Bullseye), Just(HitType::Inner), Just(HitType::Middle),
                Just(HitType::Outer), Just(HitType::Miss)
            ], 0..8)
        ) {
            let mut board = Scoreboard::new(3);
            let mut expected = 0;
            for hit_type in shots {
                let before = board.shots_remaining;
                let recorded = board.record_shot(hit_type.score(), hit_type, BowMode::Standard).is_some();
                if recorded {
                    expected += hit_type.score();
                    prop_assert_eq!(board.shots_remaining, before - 1);
                } else {
                    prop_assert_eq!(board.shots_remaining, 0);
                }
                prop_assert_eq!(board.game_over, board.shots_remaining == 0);
            }
            prop_assert_eq!(board.total_score, expected);
            prop_assert_eq!(board.history.iter().map(|r| r.score).sum::<u32>(), expected);
        }
    }
}
