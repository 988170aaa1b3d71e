//! Fixture repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::fixtures_sea;
use crate::domain::scoring::Scoreline;
use crate::entities::fixtures;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Fixture domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub id: i64,
    pub game_week_id: i64,
    pub ordinal: i16,
    pub home_team: String,
    pub away_team: String,
    /// None until the host enters the result.
    pub result: Option<Scoreline>,
}

impl Fixture {
    pub fn is_scored(&self) -> bool {
        self.result.is_some()
    }
}

/// Find a fixture by ID, failing with NotFound if absent
pub async fn require_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: i64,
) -> Result<Fixture, DomainError> {
    let fixture = fixtures_sea::find_by_id(conn, fixture_id).await?;
    fixture.map(Fixture::from).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Fixture,
            format!("fixture {fixture_id} does not exist"),
        )
    })
}

/// Find all fixtures of a game week in kickoff order
pub async fn find_all_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<Fixture>, DomainError> {
    let fixtures = fixtures_sea::find_all_by_week(conn, game_week_id).await?;
    Ok(fixtures.into_iter().map(Fixture::from).collect())
}

/// Write the final score of one fixture
pub async fn record_result(
    txn: &DatabaseTransaction,
    fixture_id: i64,
    result: Scoreline,
) -> Result<(), DomainError> {
    if result.home < 0 || result.away < 0 {
        return Err(DomainError::validation(format!(
            "scores must be non-negative, got {}-{}",
            result.home, result.away
        )));
    }
    fixtures_sea::update_score(txn, fixture_id, result.home, result.away).await?;
    Ok(())
}

impl From<fixtures::Model> for Fixture {
    fn from(model: fixtures::Model) -> Self {
        let result = match (model.home_score, model.away_score) {
            (Some(home), Some(away)) => Some(Scoreline::new(home, away)),
            _ => None,
        };
        Self {
            id: model.id,
            game_week_id: model.game_week_id,
            ordinal: model.ordinal,
            home_team: model.home_team,
            away_team: model.away_team,
            result,
        }
    }
}
