//! Game week repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::game_weeks_sea;
use crate::domain::week_status::WeekWindows;
use crate::entities::game_weeks;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game week domain model
#[derive(Debug, Clone, PartialEq)]
pub struct GameWeek {
    pub id: i64,
    pub season_id: i64,
    pub week_no: i16,
    pub windows: WeekWindows,
}

/// Find a game week by ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Option<GameWeek>, DomainError> {
    let week = game_weeks_sea::find_by_id(conn, game_week_id).await?;
    Ok(week.map(GameWeek::from))
}

/// Find a game week by ID, failing with NotFound if absent
pub async fn require_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<GameWeek, DomainError> {
    find_by_id(conn, game_week_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::GameWeek,
            format!("game week {game_week_id} does not exist"),
        )
    })
}

/// Find all game weeks of a season in week order
pub async fn find_all_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<GameWeek>, DomainError> {
    let weeks = game_weeks_sea::find_all_by_season(conn, season_id).await?;
    Ok(weeks.into_iter().map(GameWeek::from).collect())
}

impl From<game_weeks::Model> for GameWeek {
    fn from(model: game_weeks::Model) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            week_no: model.week_no,
            windows: WeekWindows {
                predictions_open: model.predictions_open,
                predictions_close: model.predictions_close,
                live_start: model.live_start,
                live_end: model.live_end,
            },
        }
    }
}
