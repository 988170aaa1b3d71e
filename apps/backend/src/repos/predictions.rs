//! Prediction repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::predictions_sea::{self, PredictionCreate};
use crate::domain::scoring::{Forecast, Scoreline};
use crate::entities::predictions::{self, PredictionSource};
use crate::errors::domain::DomainError;

/// Prediction domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: i64,
    pub player_id: i64,
    pub fixture_id: i64,
    pub predicted: Scoreline,
    pub is_default: bool,
}

impl Prediction {
    pub fn forecast(&self) -> Forecast {
        Forecast {
            player_id: self.player_id,
            fixture_id: self.fixture_id,
            predicted: self.predicted,
        }
    }
}

/// Find all predictions against a set of fixtures
pub async fn find_all_by_fixtures<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_ids: &[i64],
) -> Result<Vec<Prediction>, DomainError> {
    let predictions = predictions_sea::find_all_by_fixtures(conn, fixture_ids).await?;
    Ok(predictions.into_iter().map(Prediction::from).collect())
}

/// Create or replace a player's prediction
pub async fn submit_prediction(
    txn: &DatabaseTransaction,
    player_id: i64,
    fixture_id: i64,
    predicted: Scoreline,
) -> Result<Prediction, DomainError> {
    if predicted.home < 0 || predicted.away < 0 {
        return Err(DomainError::validation(format!(
            "predicted scores must be non-negative, got {}-{}",
            predicted.home, predicted.away
        )));
    }
    let model = predictions_sea::upsert_prediction(
        txn,
        PredictionCreate {
            player_id,
            fixture_id,
            home_goals: predicted.home,
            away_goals: predicted.away,
            source: PredictionSource::Player,
        },
    )
    .await?;
    Ok(Prediction::from(model))
}

/// Materialize default 0-0 predictions for the given (player, fixture) pairs.
///
/// Run immediately before scoring so the scoring pass sees a complete
/// forecast set and an absent prediction is never an error.
pub async fn materialize_defaults(
    txn: &DatabaseTransaction,
    missing: &[(i64, i64)],
) -> Result<usize, DomainError> {
    let dtos: Vec<PredictionCreate> = missing
        .iter()
        .map(|(player_id, fixture_id)| PredictionCreate {
            player_id: *player_id,
            fixture_id: *fixture_id,
            home_goals: 0,
            away_goals: 0,
            source: PredictionSource::Default,
        })
        .collect();
    let count = dtos.len();
    predictions_sea::insert_many(txn, dtos).await?;
    Ok(count)
}

impl From<predictions::Model> for Prediction {
    fn from(model: predictions::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            fixture_id: model.fixture_id,
            predicted: Scoreline::new(model.home_goals, model.away_goals),
            is_default: model.source == PredictionSource::Default,
        }
    }
}
