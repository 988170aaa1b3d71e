//! Prediction submission, gated by the game week's status.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::scoring::Scoreline;
use crate::domain::week_status::{self, WeekStatus};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::predictions::Prediction;
use crate::repos::{fixtures, game_weeks, players, predictions, scores};

#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionService;

impl PredictionService {
    pub fn new() -> Self {
        Self
    }

    /// Record a player's forecast for one fixture.
    ///
    /// Accepted only while the week's prediction window is open; the status
    /// classifier is the single gate, so late and early submissions are
    /// refused uniformly.
    pub async fn submit_prediction(
        &self,
        txn: &DatabaseTransaction,
        clock: &dyn Clock,
        player_id: i64,
        fixture_id: i64,
        predicted: Scoreline,
    ) -> Result<Prediction, AppError> {
        let fixture = fixtures::require_fixture(txn, fixture_id).await?;
        let week = game_weeks::require_week(txn, fixture.game_week_id).await?;
        let player = players::require_player(txn, player_id).await?;
        if player.season_id != week.season_id {
            return Err(DomainError::validation(format!(
                "player {player_id} is not in season {}",
                week.season_id
            ))
            .into());
        }

        let scores_exist = scores::week_scores_exist(txn, week.id).await?;
        let status = week_status::classify(&week.windows, scores_exist, clock.now());
        if status != WeekStatus::Predictions {
            return Err(DomainError::validation(format!(
                "game week {} is not accepting predictions (status {status:?})",
                week.id
            ))
            .into());
        }

        let prediction = predictions::submit_prediction(txn, player_id, fixture_id, predicted).await?;
        info!(
            player_id,
            fixture_id,
            home = predicted.home,
            away = predicted.away,
            "Prediction recorded"
        );
        Ok(prediction)
    }
}
