//! Prediction scoring: outcome matching, exact-score points, and the two
//! bonus rules (unique correct score, weekly exact-score count).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Points threshold at or above which a prediction counts as an exact score.
pub const EXACT_SCORE_FLOOR: i32 = 3;

/// Bonus for being the only player with the exact correct score on a fixture.
pub const UNIQUE_SCORE_BONUS: i32 = 2;

/// A scoreline: goals for the home and away side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: i16,
    pub away: i16,
}

impl Scoreline {
    pub fn new(home: i16, away: i16) -> Self {
        Self { home, away }
    }

    pub fn total_goals(&self) -> i16 {
        self.home + self.away
    }

    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Match outcome from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Score one prediction against the actual result.
///
/// - Wrong outcome: 0 points.
/// - Exact scoreline: `max(3, total goals)` — high-scoring exact predictions
///   earn more, unbounded above.
/// - Correct outcome, wrong scoreline: 1 point.
pub fn score_prediction(pred: Scoreline, actual: Scoreline) -> i32 {
    if pred.outcome() != actual.outcome() {
        return 0;
    }
    if pred == actual {
        return EXACT_SCORE_FLOOR.max(actual.total_goals() as i32);
    }
    1
}

/// Whether a base score counts as an exact score.
pub fn is_exact_score(points: i32) -> bool {
    points >= EXACT_SCORE_FLOOR
}

/// Unique-score bonus for one prediction on one fixture.
///
/// Awards [`UNIQUE_SCORE_BONUS`] iff the prediction is exactly right and no
/// other prediction in `all_predictions` (the full set for the fixture,
/// including this one) matches the actual scoreline. Two or more players
/// sharing the correct score forfeit the bonus for all of them.
pub fn unique_score_bonus(pred: Scoreline, actual: Scoreline, all_predictions: &[Scoreline]) -> i32 {
    if pred != actual {
        return 0;
    }
    let exact_count = all_predictions.iter().filter(|p| **p == actual).count();
    if exact_count == 1 {
        UNIQUE_SCORE_BONUS
    } else {
        0
    }
}

/// Flat weekly bonus from a player's count of exact scores in one game week.
pub fn weekly_bonus(exact_count: usize) -> i32 {
    match exact_count {
        0..=3 => 0,
        4 => 1,
        5 => 2,
        _ => 3,
    }
}

/// A fixture's final result, keyed for week scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureResult {
    pub fixture_id: i64,
    pub actual: Scoreline,
}

/// One player's forecast for one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forecast {
    pub player_id: i64,
    pub fixture_id: i64,
    pub predicted: Scoreline,
}

/// Per-player totals for one game week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerWeekScore {
    pub player_id: i64,
    pub correct_scores: i16,
    pub points: i32,
}

/// Score a full game week.
///
/// Expects a complete forecast set: the caller materializes default 0-0
/// forecasts for absent predictions before calling, so every (player,
/// fixture) pair present in the pool appears exactly once. Forecasts against
/// unscored fixtures are ignored.
///
/// Deterministic: output is sorted by player id. Safe to re-run on the same
/// inputs, which is what makes wholesale week re-entry idempotent.
pub fn score_week(results: &[FixtureResult], forecasts: &[Forecast]) -> Vec<PlayerWeekScore> {
    let actual_by_fixture: HashMap<i64, Scoreline> = results
        .iter()
        .map(|r| (r.fixture_id, r.actual))
        .collect();

    // Full prediction set per fixture, for the unique-score bonus.
    let mut predictions_by_fixture: HashMap<i64, Vec<Scoreline>> = HashMap::new();
    for f in forecasts {
        if actual_by_fixture.contains_key(&f.fixture_id) {
            predictions_by_fixture
                .entry(f.fixture_id)
                .or_default()
                .push(f.predicted);
        }
    }

    let mut totals: HashMap<i64, (i16, i32)> = HashMap::new();
    for f in forecasts {
        let Some(actual) = actual_by_fixture.get(&f.fixture_id) else {
            continue;
        };
        let base = score_prediction(f.predicted, *actual);
        let peers = predictions_by_fixture
            .get(&f.fixture_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let bonus = unique_score_bonus(f.predicted, *actual, peers);

        let entry = totals.entry(f.player_id).or_insert((0, 0));
        if is_exact_score(base) {
            entry.0 += 1;
        }
        entry.1 += base + bonus;
    }

    let mut scores: Vec<PlayerWeekScore> = totals
        .into_iter()
        .map(|(player_id, (correct_scores, points))| PlayerWeekScore {
            player_id,
            correct_scores,
            points: points + weekly_bonus(correct_scores as usize),
        })
        .collect();
    scores.sort_by_key(|s| s.player_id);
    scores
}
