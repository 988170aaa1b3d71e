//! DTOs for predictions_sea adapter.

use crate::entities::predictions::PredictionSource;

/// DTO for creating or replacing a prediction.
#[derive(Debug, Clone)]
pub struct PredictionCreate {
    pub player_id: i64,
    pub fixture_id: i64,
    pub home_goals: i16,
    pub away_goals: i16,
    pub source: PredictionSource,
}
