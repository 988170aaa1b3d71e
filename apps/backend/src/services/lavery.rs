//! Lavery Cup orchestration: rounds, selections, marking, and reset.

use std::collections::HashSet;

use sea_orm::DatabaseTransaction;
use tracing::{info, warn};

use crate::domain::survivor::{self, CupState};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::lavery::{self, SurvivorRound};
use crate::repos::{fixtures, players, scores};

/// Result of marking a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    pub round_id: i64,
    pub advanced: Vec<i64>,
    /// Nobody advanced: the cup needs a host-confirmed reset.
    pub deadlocked: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaveryCupService;

impl LaveryCupService {
    pub fn new() -> Self {
        Self
    }

    /// Open the next survivor round, linked to the week that will decide it.
    pub async fn create_round(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
        game_week_id: Option<i64>,
    ) -> Result<SurvivorRound, AppError> {
        let rounds = lavery::find_rounds_by_season(txn, season_id).await?;
        if let Some(open) = rounds.iter().find(|r| !r.completed) {
            return Err(DomainError::validation(format!(
                "round '{}' is still open; complete it before starting another",
                open.name
            ))
            .into());
        }
        let round_no = rounds.last().map(|r| r.round_no + 1).unwrap_or(1);
        let round = lavery::create_round(txn, season_id, round_no, game_week_id).await?;
        info!(season_id, round_no, "Survivor round created");
        Ok(round)
    }

    /// Record a player's two team picks for a round.
    ///
    /// Both picks must be new for this player this season; on success they
    /// are ledgered immediately. Resubmitting before the round is marked
    /// swaps the picks and the ledger entries.
    pub async fn submit_selection(
        &self,
        txn: &DatabaseTransaction,
        round_id: i64,
        player_id: i64,
        team_one: String,
        team_two: String,
    ) -> Result<(), AppError> {
        let round = lavery::require_round(txn, round_id).await?;
        if round.completed {
            return Err(DomainError::validation(format!(
                "round '{}' is already marked",
                round.name
            ))
            .into());
        }
        let player = players::require_player(txn, player_id).await?;
        if player.season_id != round.season_id {
            return Err(DomainError::validation(format!(
                "player {player_id} is not in season {}",
                round.season_id
            ))
            .into());
        }

        // A resubmission frees the previously ledgered picks first.
        let mut used = lavery::used_teams(txn, round.season_id, player_id).await?;
        let existing = lavery::find_selection(txn, round_id, player_id).await?;
        if let Some(existing) = &existing {
            let old = [existing.team_one.clone(), existing.team_two.clone()];
            lavery::unledger_teams(txn, round.season_id, player_id, &old).await?;
            for team in &old {
                used.remove(team);
            }
        }

        let team_one = team_one.trim().to_string();
        let team_two = team_two.trim().to_string();
        survivor::validate_selection(&team_one, &team_two, &used)?;

        lavery::upsert_selection(txn, round_id, player_id, team_one.clone(), team_two.clone())
            .await?;
        lavery::ledger_teams(txn, round.season_id, player_id, &[team_one, team_two]).await?;
        Ok(())
    }

    /// Mark a round against the host's list of winning teams.
    ///
    /// Requires the linked game week's results to be in. Persists every
    /// selection's outcome, completes the round, and reports a deadlock when
    /// nobody advanced.
    pub async fn mark_round(
        &self,
        txn: &DatabaseTransaction,
        round_id: i64,
        winning_teams: &[String],
    ) -> Result<MarkOutcome, AppError> {
        let round = lavery::require_round(txn, round_id).await?;
        if round.completed {
            return Err(DomainError::validation(format!(
                "round '{}' is already marked",
                round.name
            ))
            .into());
        }
        self.require_results_known(txn, &round).await?;

        let selections = lavery::find_selections_by_round(txn, round_id).await?;
        let round_selections: Vec<_> = selections
            .iter()
            .map(|s| s.as_round_selection())
            .collect();
        let winners: HashSet<String> = winning_teams.iter().cloned().collect();

        let marking = survivor::mark_round(&round_selections, &winners);
        lavery::record_marks(txn, &selections, &marking.marks).await?;
        lavery::complete_round(txn, round_id).await?;

        if marking.deadlocked {
            warn!(round_id, "No player advanced; survivor cup is deadlocked");
        } else {
            info!(round_id, advanced = marking.advanced.len(), "Survivor round marked");
        }

        Ok(MarkOutcome {
            round_id,
            advanced: marking.advanced,
            deadlocked: marking.deadlocked,
        })
    }

    /// Destroy the season's cup so it can restart after a deadlock.
    ///
    /// Deletes every round, selection, and used-team row. The caller owns
    /// the type-to-confirm step; this method only does the deed.
    pub async fn reset_cup(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
    ) -> Result<(), AppError> {
        lavery::delete_season_cup(txn, season_id).await?;
        warn!(season_id, "Survivor cup reset; all selection history deleted");
        Ok(())
    }

    /// Current cup state, derived at read time from completed rounds.
    pub async fn cup_state(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
    ) -> Result<CupState, AppError> {
        let pool = players::find_all_by_season(txn, season_id).await?;
        let player_ids: Vec<i64> = pool.iter().map(|p| p.id).collect();

        let rounds = lavery::find_rounds_by_season(txn, season_id).await?;
        let mut advancers_per_round = Vec::new();
        for round in rounds.iter().filter(|r| r.completed) {
            let selections = lavery::find_selections_by_round(txn, round.id).await?;
            let advancers: Vec<i64> = selections
                .iter()
                .filter(|s| s.advanced)
                .map(|s| s.player_id)
                .collect();
            advancers_per_round.push(advancers);
        }

        Ok(survivor::resolve_cup_state(&player_ids, &advancers_per_round))
    }

    /// A round is markable only once its linked week's results are known.
    async fn require_results_known(
        &self,
        txn: &DatabaseTransaction,
        round: &SurvivorRound,
    ) -> Result<(), AppError> {
        let game_week_id = round.game_week_id.ok_or_else(|| {
            DomainError::validation(format!(
                "round '{}' is not linked to a game week",
                round.name
            ))
        })?;
        let week_fixtures = fixtures::find_all_by_week(txn, game_week_id).await?;
        let all_scored = !week_fixtures.is_empty() && week_fixtures.iter().all(|f| f.is_scored());
        if !all_scored && !scores::week_scores_exist(txn, game_week_id).await? {
            return Err(DomainError::validation(format!(
                "game week {game_week_id} results are not in yet; round '{}' cannot be marked",
                round.name
            ))
            .into());
        }
        Ok(())
    }
}
