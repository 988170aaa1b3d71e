//! SeaORM adapter for fixtures.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::fixtures;

/// Find a fixture by ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: i64,
) -> Result<Option<fixtures::Model>, sea_orm::DbErr> {
    fixtures::Entity::find_by_id(fixture_id).one(conn).await
}

/// Find all fixtures of a game week (ordered by ordinal)
pub async fn find_all_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<fixtures::Model>, sea_orm::DbErr> {
    fixtures::Entity::find()
        .filter(fixtures::Column::GameWeekId.eq(game_week_id))
        .order_by_asc(fixtures::Column::Ordinal)
        .all(conn)
        .await
}

/// Write the final score of one fixture
pub async fn update_score(
    txn: &DatabaseTransaction,
    fixture_id: i64,
    home_score: i16,
    away_score: i16,
) -> Result<(), sea_orm::DbErr> {
    let update = fixtures::ActiveModel {
        id: Set(fixture_id),
        home_score: Set(Some(home_score)),
        away_score: Set(Some(away_score)),
        ..Default::default()
    };
    fixtures::Entity::update(update).exec(txn).await?;
    Ok(())
}
