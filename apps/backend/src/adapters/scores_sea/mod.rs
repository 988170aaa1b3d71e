//! SeaORM adapter for derived score rows.
//!
//! Weekly and season scores are replaced wholesale (delete then bulk
//! insert); there are deliberately no incremental update functions here.

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter, Set};

use crate::entities::{game_week_scores, season_scores};

pub mod dto;

pub use dto::{SeasonScoreCreate, WeekScoreCreate};

/// Find all weekly score rows for a game week
pub async fn find_all_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<game_week_scores::Model>, sea_orm::DbErr> {
    game_week_scores::Entity::find()
        .filter(game_week_scores::Column::GameWeekId.eq(game_week_id))
        .all(conn)
        .await
}

/// Find all weekly score rows across a set of game weeks
pub async fn find_all_by_weeks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_ids: &[i64],
) -> Result<Vec<game_week_scores::Model>, sea_orm::DbErr> {
    if game_week_ids.is_empty() {
        return Ok(Vec::new());
    }
    game_week_scores::Entity::find()
        .filter(game_week_scores::Column::GameWeekId.is_in(game_week_ids.iter().copied()))
        .all(conn)
        .await
}

/// Whether any weekly score rows exist for a game week
pub async fn week_scores_exist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    use sea_orm::PaginatorTrait;

    let count = game_week_scores::Entity::find()
        .filter(game_week_scores::Column::GameWeekId.eq(game_week_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Replace every weekly score row for a game week
pub async fn replace_week_scores(
    txn: &DatabaseTransaction,
    game_week_id: i64,
    rows: Vec<WeekScoreCreate>,
) -> Result<(), sea_orm::DbErr> {
    game_week_scores::Entity::delete_many()
        .filter(game_week_scores::Column::GameWeekId.eq(game_week_id))
        .exec(txn)
        .await?;

    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.into_iter().map(|row| game_week_scores::ActiveModel {
        id: sea_orm::NotSet,
        game_week_id: Set(row.game_week_id),
        player_id: Set(row.player_id),
        correct_scores: Set(row.correct_scores),
        points: Set(row.points),
    });
    game_week_scores::Entity::insert_many(models)
        .exec(txn)
        .await?;
    Ok(())
}

/// Find all season score rows for a season
pub async fn find_all_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<season_scores::Model>, sea_orm::DbErr> {
    season_scores::Entity::find()
        .filter(season_scores::Column::SeasonId.eq(season_id))
        .all(conn)
        .await
}

/// Replace every season score row for a season
pub async fn replace_season_scores(
    txn: &DatabaseTransaction,
    season_id: i64,
    rows: Vec<SeasonScoreCreate>,
) -> Result<(), sea_orm::DbErr> {
    season_scores::Entity::delete_many()
        .filter(season_scores::Column::SeasonId.eq(season_id))
        .exec(txn)
        .await?;

    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.into_iter().map(|row| season_scores::ActiveModel {
        id: sea_orm::NotSet,
        season_id: Set(row.season_id),
        player_id: Set(row.player_id),
        correct_scores: Set(row.correct_scores),
        points: Set(row.points),
    });
    season_scores::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}
