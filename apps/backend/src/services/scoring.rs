//! Score entry pipeline.
//!
//! One host action — submitting a week's match results — drives the whole
//! chain: fixture updates, default-prediction materialization, weekly
//! scoring, season recompute, and knockout resolution for any rounds
//! hanging off the week. The caller wraps the call in a single transaction
//! via `db::txn::with_txn`, so the chain commits atomically or not at all.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::domain::scoring::{self, FixtureResult, Scoreline};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::{fixtures, game_weeks, george, lavery, players, predictions, scores};
use crate::services::george::GeorgeCupService;

/// One fixture's result as submitted by the host.
#[derive(Debug, Clone, Copy)]
pub struct ResultEntry {
    pub fixture_id: i64,
    pub result: Scoreline,
}

/// What a scoring run did, for the host-facing summary.
#[derive(Debug, Clone)]
pub struct WeekScoringOutcome {
    pub game_week_id: i64,
    pub players_scored: usize,
    pub defaults_materialized: usize,
    /// Knockout rounds resolved off this week's scores.
    pub george_rounds_resolved: Vec<i64>,
    /// Survivor rounds now ready for the host to mark.
    pub lavery_rounds_markable: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Enter (or re-enter) a game week's results and recompute everything
    /// derived from them.
    pub async fn enter_week_results(
        &self,
        txn: &DatabaseTransaction,
        game_week_id: i64,
        entries: &[ResultEntry],
    ) -> Result<WeekScoringOutcome, AppError> {
        info!(game_week_id, entries = entries.len(), "Entering week results");

        let week = game_weeks::require_week(txn, game_week_id).await?;
        let week_fixtures = fixtures::find_all_by_week(txn, game_week_id).await?;

        // Every fixture of the week must get a result, each exactly once.
        let fixture_ids: HashSet<i64> = week_fixtures.iter().map(|f| f.id).collect();
        let mut seen: HashSet<i64> = HashSet::new();
        for entry in entries {
            if !fixture_ids.contains(&entry.fixture_id) {
                return Err(DomainError::validation(format!(
                    "fixture {} does not belong to game week {game_week_id}",
                    entry.fixture_id
                ))
                .into());
            }
            if !seen.insert(entry.fixture_id) {
                return Err(DomainError::validation(format!(
                    "fixture {} was submitted twice",
                    entry.fixture_id
                ))
                .into());
            }
        }
        if seen.len() != week_fixtures.len() {
            return Err(DomainError::validation(format!(
                "expected results for all {} fixtures, got {}",
                week_fixtures.len(),
                seen.len()
            ))
            .into());
        }

        for entry in entries {
            fixtures::record_result(txn, entry.fixture_id, entry.result).await?;
        }

        // Fill prediction gaps with 0-0 defaults so every player is scoreable.
        let pool = players::find_all_by_season(txn, week.season_id).await?;
        let fixture_id_list: Vec<i64> = week_fixtures.iter().map(|f| f.id).collect();
        let existing = predictions::find_all_by_fixtures(txn, &fixture_id_list).await?;
        let have: HashSet<(i64, i64)> = existing
            .iter()
            .map(|p| (p.player_id, p.fixture_id))
            .collect();
        let missing: Vec<(i64, i64)> = pool
            .iter()
            .flat_map(|player| fixture_id_list.iter().map(move |fid| (player.id, *fid)))
            .filter(|pair| !have.contains(pair))
            .collect();
        let defaults_materialized = predictions::materialize_defaults(txn, &missing).await?;
        debug!(game_week_id, defaults_materialized, "Materialized default predictions");

        // Score the week from scratch.
        let results: Vec<FixtureResult> = entries
            .iter()
            .map(|e| FixtureResult {
                fixture_id: e.fixture_id,
                actual: e.result,
            })
            .collect();
        let all_predictions = predictions::find_all_by_fixtures(txn, &fixture_id_list).await?;
        let forecasts: Vec<_> = all_predictions.iter().map(|p| p.forecast()).collect();
        let week_scores = scoring::score_week(&results, &forecasts);
        scores::replace_week_scores(txn, game_week_id, &week_scores).await?;

        // Season totals, from scratch, from the weekly rows.
        let season_weeks = game_weeks::find_all_by_season(txn, week.season_id).await?;
        let season_week_ids: Vec<i64> = season_weeks.iter().map(|w| w.id).collect();
        scores::recompute_season_scores(txn, week.season_id, &season_week_ids).await?;

        // Knockout rounds riding on this week can now be decided.
        let knockout = GeorgeCupService::new();
        let mut george_rounds_resolved = Vec::new();
        for round in george::find_rounds_by_week(txn, game_week_id).await? {
            if knockout.resolve_round(txn, &round).await? {
                george_rounds_resolved.push(round.id);
            }
        }

        // Survivor rounds riding on this week are now markable by the host.
        let lavery_rounds_markable: Vec<i64> = lavery::find_rounds_by_week(txn, game_week_id)
            .await?
            .into_iter()
            .filter(|r| !r.completed)
            .map(|r| r.id)
            .collect();

        info!(
            game_week_id,
            players_scored = week_scores.len(),
            george_rounds = george_rounds_resolved.len(),
            "Week scored"
        );

        Ok(WeekScoringOutcome {
            game_week_id,
            players_scored: week_scores.len(),
            defaults_materialized,
            george_rounds_resolved,
            lavery_rounds_markable,
        })
    }

    /// Weekly standings as a map, defaulting absent players to zero.
    pub async fn week_standings(
        &self,
        txn: &DatabaseTransaction,
        game_week_id: i64,
    ) -> Result<HashMap<i64, crate::domain::tie_break::WeekStanding>, AppError> {
        Ok(scores::week_standings(txn, game_week_id).await?)
    }

    /// The season table as last recomputed, one row per scored player.
    pub async fn season_table(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
    ) -> Result<Vec<scores::SeasonScore>, AppError> {
        Ok(scores::season_table(txn, season_id).await?)
    }
}
