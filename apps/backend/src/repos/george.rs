//! George Cup repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::george_sea::{self, KnockoutFixtureCreate, RoundCreate};
use crate::domain::tie_break::{self, DecidedBy};
use crate::entities::george_fixtures::{self, DecisionMethod};
use crate::entities::george_rounds::{self, RoundState};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Knockout round domain model
#[derive(Debug, Clone, PartialEq)]
pub struct KnockoutRound {
    pub id: i64,
    pub season_id: i64,
    pub round_no: i16,
    pub name: String,
    pub game_week_id: Option<i64>,
    pub state: RoundState,
    pub fixture_count: i16,
}

/// Knockout fixture domain model
#[derive(Debug, Clone, PartialEq)]
pub struct KnockoutFixture {
    pub id: i64,
    pub round_id: i64,
    pub fixture_no: i16,
    pub home_player_id: Option<i64>,
    pub away_player_id: Option<i64>,
    pub winner_player_id: Option<i64>,
    pub decided_by: Option<DecidedBy>,
}

/// Find all rounds of a season's bracket
pub async fn find_rounds_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<KnockoutRound>, DomainError> {
    let rounds = george_sea::find_rounds_by_season(conn, season_id).await?;
    Ok(rounds.into_iter().map(KnockoutRound::from).collect())
}

/// Find active rounds driven by a game week
pub async fn find_rounds_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<KnockoutRound>, DomainError> {
    let rounds = george_sea::find_rounds_by_week(conn, game_week_id).await?;
    Ok(rounds.into_iter().map(KnockoutRound::from).collect())
}

/// Create one round in NotStarted state
pub async fn create_round(
    txn: &DatabaseTransaction,
    season_id: i64,
    round_no: i16,
    name: String,
    game_week_id: Option<i64>,
    fixture_count: i16,
) -> Result<KnockoutRound, DomainError> {
    let round = george_sea::create_round(
        txn,
        RoundCreate {
            season_id,
            round_no,
            name,
            game_week_id,
            fixture_count,
        },
    )
    .await?;
    Ok(KnockoutRound::from(round))
}

/// Link a round to its deciding game week
pub async fn link_round_to_week(
    txn: &DatabaseTransaction,
    round_id: i64,
    game_week_id: i64,
) -> Result<(), DomainError> {
    george_sea::link_round_to_week(txn, round_id, game_week_id).await?;
    Ok(())
}

/// Claim a round for drawing. Fails with a conflict if it was already drawn.
pub async fn claim_round_for_draw(
    txn: &DatabaseTransaction,
    round: &KnockoutRound,
) -> Result<(), DomainError> {
    let claimed = george_sea::claim_round_for_draw(txn, round.id).await?;
    if !claimed {
        return Err(DomainError::conflict(
            ConflictKind::RoundAlreadyDrawn,
            format!("round '{}' has already been drawn", round.name),
        ));
    }
    Ok(())
}

/// Mark a round Completed
pub async fn complete_round(txn: &DatabaseTransaction, round_id: i64) -> Result<(), DomainError> {
    george_sea::complete_round(txn, round_id).await?;
    Ok(())
}

/// Keep the earliest round row per round number, delete later duplicates
pub async fn delete_duplicate_rounds(
    txn: &DatabaseTransaction,
    season_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(george_sea::delete_duplicate_rounds(txn, season_id).await?)
}

/// Find all fixtures of a round in fixture order
pub async fn find_fixtures_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<KnockoutFixture>, DomainError> {
    let fixtures = george_sea::find_fixtures_by_round(conn, round_id).await?;
    Ok(fixtures.into_iter().map(KnockoutFixture::from).collect())
}

/// Bulk-create fixtures for a round
pub async fn create_fixtures(
    txn: &DatabaseTransaction,
    round_id: i64,
    seats: Vec<(Option<i64>, Option<i64>)>,
) -> Result<(), DomainError> {
    let dtos = seats
        .into_iter()
        .enumerate()
        .map(|(idx, (home, away))| KnockoutFixtureCreate {
            round_id,
            fixture_no: (idx + 1) as i16,
            home_player_id: home,
            away_player_id: away,
        })
        .collect();
    george_sea::insert_fixtures(txn, dtos).await?;
    Ok(())
}

/// Seat a player into an open side of a fixture
pub async fn seat_player(
    txn: &DatabaseTransaction,
    fixture: &KnockoutFixture,
    player_id: i64,
) -> Result<(), DomainError> {
    let home = if fixture.home_player_id.is_none() {
        true
    } else if fixture.away_player_id.is_none() {
        false
    } else {
        return Err(DomainError::validation(format!(
            "fixture {} of round {} has no open seat",
            fixture.fixture_no, fixture.round_id
        )));
    };
    george_sea::seat_player(txn, fixture.id, home, player_id).await?;
    Ok(())
}

/// Record a fixture's winner.
///
/// The winner must be one of the fixture's competitors, and a decided
/// fixture is never re-decided.
pub async fn record_winner(
    txn: &DatabaseTransaction,
    fixture: &KnockoutFixture,
    winner_player_id: i64,
    decided_by: DecidedBy,
) -> Result<(), DomainError> {
    if fixture.winner_player_id.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::WinnerAlreadyDecided,
            format!("fixture {} already has a winner", fixture.id),
        ));
    }
    if !tie_break::is_valid_winner(
        fixture.home_player_id,
        fixture.away_player_id,
        winner_player_id,
    ) {
        return Err(DomainError::validation(format!(
            "player {winner_player_id} is not a competitor in fixture {}",
            fixture.id
        )));
    }
    george_sea::set_winner(txn, fixture.id, winner_player_id, decided_by.into()).await?;
    Ok(())
}

/// Find a round by ID, failing with NotFound if absent
pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    round_no: i16,
) -> Result<KnockoutRound, DomainError> {
    let rounds = find_rounds_by_season(conn, season_id).await?;
    rounds
        .into_iter()
        .find(|r| r.round_no == round_no)
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::KnockoutRound,
                format!("season {season_id} has no knockout round {round_no}"),
            )
        })
}

impl From<george_rounds::Model> for KnockoutRound {
    fn from(model: george_rounds::Model) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            round_no: model.round_no,
            name: model.name,
            game_week_id: model.game_week_id,
            state: model.state,
            fixture_count: model.fixture_count,
        }
    }
}

impl From<george_fixtures::Model> for KnockoutFixture {
    fn from(model: george_fixtures::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            fixture_no: model.fixture_no,
            home_player_id: model.home_player_id,
            away_player_id: model.away_player_id,
            winner_player_id: model.winner_player_id,
            decided_by: model.decided_by.map(DecidedBy::from),
        }
    }
}

impl From<DecisionMethod> for DecidedBy {
    fn from(method: DecisionMethod) -> Self {
        match method {
            DecisionMethod::Bye => DecidedBy::Bye,
            DecisionMethod::Points => DecidedBy::Points,
            DecisionMethod::CorrectScores => DecidedBy::CorrectScores,
            DecisionMethod::CoinFlip => DecidedBy::CoinFlip,
        }
    }
}

impl From<DecidedBy> for DecisionMethod {
    fn from(decided: DecidedBy) -> Self {
        match decided {
            DecidedBy::Bye => DecisionMethod::Bye,
            DecidedBy::Points => DecisionMethod::Points,
            DecidedBy::CorrectScores => DecisionMethod::CorrectScores,
            DecidedBy::CoinFlip => DecisionMethod::CoinFlip,
        }
    }
}
