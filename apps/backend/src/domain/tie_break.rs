//! Winner determination for knockout fixtures.
//!
//! A fixture is decided from the two competitors' weekly standings with a
//! fixed tie-break ladder: points, then correct scores, then a fair coin
//! flip. The coin flip is genuinely random; the service layer persists the
//! outcome so a decided fixture is never re-flipped.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A competitor's standing for the game week that drives a knockout round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekStanding {
    pub points: i32,
    pub correct_scores: i16,
}

/// How a knockout fixture's winner was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecidedBy {
    Bye,
    Points,
    CorrectScores,
    CoinFlip,
}

/// The decision for one knockout fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureDecision {
    Winner { player_id: i64, decided_by: DecidedBy },
    /// Neither seat is filled; the round cannot complete yet.
    Unresolved,
}

/// Decide a knockout fixture.
///
/// `standing_of` supplies the weekly standing for a competitor; a player
/// with no score row for the week competes with a zeroed standing.
pub fn decide_fixture<R, F>(
    home: Option<i64>,
    away: Option<i64>,
    standing_of: F,
    rng: &mut R,
) -> FixtureDecision
where
    R: Rng + ?Sized,
    F: Fn(i64) -> WeekStanding,
{
    let (home_id, away_id) = match (home, away) {
        (None, None) => return FixtureDecision::Unresolved,
        (Some(p), None) | (None, Some(p)) => {
            return FixtureDecision::Winner {
                player_id: p,
                decided_by: DecidedBy::Bye,
            }
        }
        (Some(h), Some(a)) => (h, a),
    };

    let hs = standing_of(home_id);
    let as_ = standing_of(away_id);

    if hs.points != as_.points {
        let player_id = if hs.points > as_.points { home_id } else { away_id };
        return FixtureDecision::Winner {
            player_id,
            decided_by: DecidedBy::Points,
        };
    }
    if hs.correct_scores != as_.correct_scores {
        let player_id = if hs.correct_scores > as_.correct_scores {
            home_id
        } else {
            away_id
        };
        return FixtureDecision::Winner {
            player_id,
            decided_by: DecidedBy::CorrectScores,
        };
    }

    let player_id = if rng.random_bool(0.5) { home_id } else { away_id };
    FixtureDecision::Winner {
        player_id,
        decided_by: DecidedBy::CoinFlip,
    }
}

/// Whether `winner` is a legal winner value for a fixture with the given
/// seats: one of the two competitors, or the sole competitor of a bye.
pub fn is_valid_winner(home: Option<i64>, away: Option<i64>, winner: i64) -> bool {
    home == Some(winner) || away == Some(winner)
}
