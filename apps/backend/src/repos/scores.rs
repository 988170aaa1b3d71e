//! Derived score repository: weekly and season totals.
//!
//! Both tables are replace-only. `SeasonScore` is always recomputed from
//! the weekly rows, never patched, so the season total provably equals the
//! sum of its weeks.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::scores_sea::{self, SeasonScoreCreate, WeekScoreCreate};
use crate::domain::scoring::PlayerWeekScore;
use crate::domain::tie_break::WeekStanding;
use crate::entities::{game_week_scores, season_scores};
use crate::errors::domain::DomainError;

/// Season standing domain model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonScore {
    pub player_id: i64,
    pub correct_scores: i16,
    pub points: i32,
}

/// Weekly standings per player, for knockout tie-breaks
pub async fn week_standings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<HashMap<i64, WeekStanding>, DomainError> {
    let rows = scores_sea::find_all_by_week(conn, game_week_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.player_id,
                WeekStanding {
                    points: row.points,
                    correct_scores: row.correct_scores,
                },
            )
        })
        .collect())
}

/// Whether the week has been scored yet
pub async fn week_scores_exist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<bool, DomainError> {
    Ok(scores_sea::week_scores_exist(conn, game_week_id).await?)
}

/// Replace the weekly score rows for a game week
pub async fn replace_week_scores(
    txn: &DatabaseTransaction,
    game_week_id: i64,
    scores: &[PlayerWeekScore],
) -> Result<(), DomainError> {
    let rows = scores
        .iter()
        .map(|s| WeekScoreCreate {
            game_week_id,
            player_id: s.player_id,
            correct_scores: s.correct_scores,
            points: s.points,
        })
        .collect();
    scores_sea::replace_week_scores(txn, game_week_id, rows).await?;
    Ok(())
}

/// Recompute and replace the season totals from every weekly row.
///
/// `game_week_ids` is the full set of weeks in the season; summation happens
/// here, from scratch, on every call.
pub async fn recompute_season_scores(
    txn: &DatabaseTransaction,
    season_id: i64,
    game_week_ids: &[i64],
) -> Result<Vec<SeasonScore>, DomainError> {
    let weekly = scores_sea::find_all_by_weeks(txn, game_week_ids).await?;

    let mut totals: HashMap<i64, (i16, i32)> = HashMap::new();
    for row in &weekly {
        let entry = totals.entry(row.player_id).or_insert((0, 0));
        entry.0 += row.correct_scores;
        entry.1 += row.points;
    }

    let mut season: Vec<SeasonScore> = totals
        .into_iter()
        .map(|(player_id, (correct_scores, points))| SeasonScore {
            player_id,
            correct_scores,
            points,
        })
        .collect();
    season.sort_by_key(|s| s.player_id);

    let rows = season
        .iter()
        .map(|s| SeasonScoreCreate {
            season_id,
            player_id: s.player_id,
            correct_scores: s.correct_scores,
            points: s.points,
        })
        .collect();
    scores_sea::replace_season_scores(txn, season_id, rows).await?;
    Ok(season)
}

/// Current season table, one row per player
pub async fn season_table<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<SeasonScore>, DomainError> {
    let rows = scores_sea::find_all_by_season(conn, season_id).await?;
    Ok(rows.into_iter().map(SeasonScore::from).collect())
}

impl From<season_scores::Model> for SeasonScore {
    fn from(model: season_scores::Model) -> Self {
        Self {
            player_id: model.player_id,
            correct_scores: model.correct_scores,
            points: model.points,
        }
    }
}

impl From<game_week_scores::Model> for PlayerWeekScore {
    fn from(model: game_week_scores::Model) -> Self {
        Self {
            player_id: model.player_id,
            correct_scores: model.correct_scores,
            points: model.points,
        }
    }
}
