//! Lavery Cup repository functions for the domain layer.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::lavery_sea::{self, RoundCreate, SelectionCreate, SelectionMarkUpdate};
use crate::domain::survivor::{RoundSelection, SelectionMark};
use crate::entities::{lavery_rounds, lavery_selections};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Survivor round domain model
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivorRound {
    pub id: i64,
    pub season_id: i64,
    pub round_no: i16,
    pub name: String,
    pub game_week_id: Option<i64>,
    pub completed: bool,
}

/// Survivor selection domain model
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivorSelection {
    pub id: i64,
    pub round_id: i64,
    pub player_id: i64,
    pub team_one: String,
    pub team_two: String,
    pub team_one_won: Option<bool>,
    pub team_two_won: Option<bool>,
    pub advanced: bool,
}

impl SurvivorSelection {
    pub fn as_round_selection(&self) -> RoundSelection {
        RoundSelection {
            player_id: self.player_id,
            team_one: self.team_one.clone(),
            team_two: self.team_two.clone(),
        }
    }
}

/// Find all rounds of a season's cup in round order
pub async fn find_rounds_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<SurvivorRound>, DomainError> {
    let rounds = lavery_sea::find_rounds_by_season(conn, season_id).await?;
    Ok(rounds.into_iter().map(SurvivorRound::from).collect())
}

/// Find rounds decided by a game week
pub async fn find_rounds_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<SurvivorRound>, DomainError> {
    let rounds = lavery_sea::find_rounds_by_week(conn, game_week_id).await?;
    Ok(rounds.into_iter().map(SurvivorRound::from).collect())
}

/// Find a round by ID, failing with NotFound if absent
pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<SurvivorRound, DomainError> {
    let round = lavery_sea::find_round_by_id(conn, round_id).await?;
    round.map(SurvivorRound::from).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::SurvivorRound,
            format!("survivor round {round_id} does not exist"),
        )
    })
}

/// Create a survivor round
pub async fn create_round(
    txn: &DatabaseTransaction,
    season_id: i64,
    round_no: i16,
    game_week_id: Option<i64>,
) -> Result<SurvivorRound, DomainError> {
    let round = lavery_sea::create_round(
        txn,
        RoundCreate {
            season_id,
            round_no,
            name: format!("Round {round_no}"),
            game_week_id,
        },
    )
    .await?;
    Ok(SurvivorRound::from(round))
}

/// Mark a round complete
pub async fn complete_round(txn: &DatabaseTransaction, round_id: i64) -> Result<(), DomainError> {
    lavery_sea::complete_round(txn, round_id).await?;
    Ok(())
}

/// Find all selections of a round
pub async fn find_selections_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<SurvivorSelection>, DomainError> {
    let selections = lavery_sea::find_selections_by_round(conn, round_id).await?;
    Ok(selections.into_iter().map(SurvivorSelection::from).collect())
}

/// Find one player's selection for a round
pub async fn find_selection<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    player_id: i64,
) -> Result<Option<SurvivorSelection>, DomainError> {
    let selection = lavery_sea::find_selection(conn, round_id, player_id).await?;
    Ok(selection.map(SurvivorSelection::from))
}

/// Create or replace a player's selection
pub async fn upsert_selection(
    txn: &DatabaseTransaction,
    round_id: i64,
    player_id: i64,
    team_one: String,
    team_two: String,
) -> Result<SurvivorSelection, DomainError> {
    let selection = lavery_sea::upsert_selection(
        txn,
        SelectionCreate {
            round_id,
            player_id,
            team_one,
            team_two,
        },
    )
    .await?;
    Ok(SurvivorSelection::from(selection))
}

/// Persist marked results for a round's selections
pub async fn record_marks(
    txn: &DatabaseTransaction,
    selections: &[SurvivorSelection],
    marks: &[SelectionMark],
) -> Result<(), DomainError> {
    for mark in marks {
        let selection = selections
            .iter()
            .find(|s| s.player_id == mark.player_id)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "no selection found for player {} while marking",
                    mark.player_id
                ))
            })?;
        lavery_sea::update_selection_marks(
            txn,
            SelectionMarkUpdate {
                selection_id: selection.id,
                team_one_won: mark.team_one_won,
                team_two_won: mark.team_two_won,
                advanced: mark.advanced,
            },
        )
        .await?;
    }
    Ok(())
}

/// The set of team names a player has used this season
pub async fn used_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    player_id: i64,
) -> Result<HashSet<String>, DomainError> {
    let rows = lavery_sea::find_used_teams(conn, season_id, player_id).await?;
    Ok(rows.into_iter().map(|row| row.team).collect())
}

/// Ledger teams as used
pub async fn ledger_teams(
    txn: &DatabaseTransaction,
    season_id: i64,
    player_id: i64,
    teams: &[String],
) -> Result<(), DomainError> {
    lavery_sea::insert_used_teams(txn, season_id, player_id, teams).await?;
    Ok(())
}

/// Unledger teams (selection replaced before the round was marked)
pub async fn unledger_teams(
    txn: &DatabaseTransaction,
    season_id: i64,
    player_id: i64,
    teams: &[String],
) -> Result<(), DomainError> {
    lavery_sea::delete_used_teams(txn, season_id, player_id, teams).await?;
    Ok(())
}

/// Delete the entire cup for a season
pub async fn delete_season_cup(
    txn: &DatabaseTransaction,
    season_id: i64,
) -> Result<(), DomainError> {
    lavery_sea::delete_season_cup(txn, season_id).await?;
    Ok(())
}

impl From<lavery_rounds::Model> for SurvivorRound {
    fn from(model: lavery_rounds::Model) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            round_no: model.round_no,
            name: model.name,
            game_week_id: model.game_week_id,
            completed: model.completed,
        }
    }
}

impl From<lavery_selections::Model> for SurvivorSelection {
    fn from(model: lavery_selections::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            player_id: model.player_id,
            team_one: model.team_one,
            team_two: model.team_two,
            team_one_won: model.team_one_won,
            team_two_won: model.team_two_won,
            advanced: model.advanced,
        }
    }
}
