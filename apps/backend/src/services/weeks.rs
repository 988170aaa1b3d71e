//! Game-week status lookups.

use sea_orm::ConnectionTrait;

use crate::domain::clock::Clock;
use crate::domain::week_status::{self, WeekStatus};
use crate::error::AppError;
use crate::repos::{game_weeks, scores};

#[derive(Debug, Clone, Copy, Default)]
pub struct WeekService;

impl WeekService {
    pub fn new() -> Self {
        Self
    }

    /// Classify a game week right now, per the injected clock.
    pub async fn status<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        clock: &dyn Clock,
        game_week_id: i64,
    ) -> Result<WeekStatus, AppError> {
        let week = game_weeks::require_week(conn, game_week_id).await?;
        let scores_exist = scores::week_scores_exist(conn, game_week_id).await?;
        Ok(week_status::classify(
            &week.windows,
            scores_exist,
            clock.now(),
        ))
    }
}
