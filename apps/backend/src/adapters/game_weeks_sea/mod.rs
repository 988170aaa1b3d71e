//! SeaORM adapter for game weeks.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::game_weeks;

/// Find a game week by ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Option<game_weeks::Model>, sea_orm::DbErr> {
    game_weeks::Entity::find_by_id(game_week_id).one(conn).await
}

/// Find all game weeks of a season (ordered by week_no)
pub async fn find_all_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<game_weeks::Model>, sea_orm::DbErr> {
    game_weeks::Entity::find()
        .filter(game_weeks::Column::SeasonId.eq(season_id))
        .order_by_asc(game_weeks::Column::WeekNo)
        .all(conn)
        .await
}
