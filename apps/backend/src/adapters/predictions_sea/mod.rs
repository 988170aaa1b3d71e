//! SeaORM adapter for predictions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    Set,
};

use crate::entities::predictions;

pub mod dto;

pub use dto::PredictionCreate;

/// Find all predictions for a set of fixtures
pub async fn find_all_by_fixtures<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_ids: &[i64],
) -> Result<Vec<predictions::Model>, sea_orm::DbErr> {
    if fixture_ids.is_empty() {
        return Ok(Vec::new());
    }
    predictions::Entity::find()
        .filter(predictions::Column::FixtureId.is_in(fixture_ids.iter().copied()))
        .all(conn)
        .await
}

/// Find one player's prediction for one fixture
pub async fn find_by_player_and_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    fixture_id: i64,
) -> Result<Option<predictions::Model>, sea_orm::DbErr> {
    predictions::Entity::find()
        .filter(predictions::Column::PlayerId.eq(player_id))
        .filter(predictions::Column::FixtureId.eq(fixture_id))
        .one(conn)
        .await
}

/// Create or replace a player's prediction for a fixture
pub async fn upsert_prediction(
    txn: &DatabaseTransaction,
    dto: PredictionCreate,
) -> Result<predictions::Model, sea_orm::DbErr> {
    if let Some(existing) = find_by_player_and_fixture(txn, dto.player_id, dto.fixture_id).await? {
        let mut update: predictions::ActiveModel = existing.into();
        update.home_goals = Set(dto.home_goals);
        update.away_goals = Set(dto.away_goals);
        update.source = Set(dto.source);
        return update.update(txn).await;
    }

    let prediction = predictions::ActiveModel {
        id: sea_orm::NotSet,
        player_id: Set(dto.player_id),
        fixture_id: Set(dto.fixture_id),
        home_goals: Set(dto.home_goals),
        away_goals: Set(dto.away_goals),
        source: Set(dto.source),
    };
    prediction.insert(txn).await
}

/// Bulk-insert predictions (used to materialize scoring defaults)
pub async fn insert_many(
    txn: &DatabaseTransaction,
    dtos: Vec<PredictionCreate>,
) -> Result<(), sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(());
    }
    let models = dtos.into_iter().map(|dto| predictions::ActiveModel {
        id: sea_orm::NotSet,
        player_id: Set(dto.player_id),
        fixture_id: Set(dto.fixture_id),
        home_goals: Set(dto.home_goals),
        away_goals: Set(dto.away_goals),
        source: Set(dto.source),
    });
    predictions::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}
