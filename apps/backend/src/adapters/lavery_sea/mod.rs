//! SeaORM adapter for the Lavery Cup (survivor tournament).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{lavery_rounds, lavery_selections, lavery_used_teams};

pub mod dto;

pub use dto::{RoundCreate, SelectionCreate, SelectionMarkUpdate};

/// Find all survivor rounds of a season (ordered by round_no)
pub async fn find_rounds_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<lavery_rounds::Model>, sea_orm::DbErr> {
    lavery_rounds::Entity::find()
        .filter(lavery_rounds::Column::SeasonId.eq(season_id))
        .order_by_asc(lavery_rounds::Column::RoundNo)
        .all(conn)
        .await
}

/// Find rounds decided by the given game week
pub async fn find_rounds_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<lavery_rounds::Model>, sea_orm::DbErr> {
    lavery_rounds::Entity::find()
        .filter(lavery_rounds::Column::GameWeekId.eq(game_week_id))
        .order_by_asc(lavery_rounds::Column::RoundNo)
        .all(conn)
        .await
}

/// Find a round by ID
pub async fn find_round_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<lavery_rounds::Model>, sea_orm::DbErr> {
    lavery_rounds::Entity::find_by_id(round_id).one(conn).await
}

/// Create a survivor round
pub async fn create_round(
    txn: &DatabaseTransaction,
    dto: RoundCreate,
) -> Result<lavery_rounds::Model, sea_orm::DbErr> {
    let round = lavery_rounds::ActiveModel {
        id: sea_orm::NotSet,
        season_id: Set(dto.season_id),
        round_no: Set(dto.round_no),
        name: Set(dto.name),
        game_week_id: Set(dto.game_week_id),
        completed: Set(false),
    };
    round.insert(txn).await
}

/// Mark a round complete
pub async fn complete_round(
    txn: &DatabaseTransaction,
    round_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let update = lavery_rounds::ActiveModel {
        id: Set(round_id),
        completed: Set(true),
        ..Default::default()
    };
    lavery_rounds::Entity::update(update).exec(txn).await?;
    Ok(())
}

/// Find all selections of a round (ordered by player_id)
pub async fn find_selections_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<lavery_selections::Model>, sea_orm::DbErr> {
    lavery_selections::Entity::find()
        .filter(lavery_selections::Column::RoundId.eq(round_id))
        .order_by_asc(lavery_selections::Column::PlayerId)
        .all(conn)
        .await
}

/// Find one player's selection for a round
pub async fn find_selection<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    player_id: i64,
) -> Result<Option<lavery_selections::Model>, sea_orm::DbErr> {
    lavery_selections::Entity::find()
        .filter(lavery_selections::Column::RoundId.eq(round_id))
        .filter(lavery_selections::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

/// Create or replace a player's selection for a round
pub async fn upsert_selection(
    txn: &DatabaseTransaction,
    dto: SelectionCreate,
) -> Result<lavery_selections::Model, sea_orm::DbErr> {
    if let Some(existing) = find_selection(txn, dto.round_id, dto.player_id).await? {
        let mut update: lavery_selections::ActiveModel = existing.into();
        update.team_one = Set(dto.team_one);
        update.team_two = Set(dto.team_two);
        return update.update(txn).await;
    }

    let selection = lavery_selections::ActiveModel {
        id: sea_orm::NotSet,
        round_id: Set(dto.round_id),
        player_id: Set(dto.player_id),
        team_one: Set(dto.team_one),
        team_two: Set(dto.team_two),
        team_one_won: Set(None),
        team_two_won: Set(None),
        advanced: Set(false),
    };
    selection.insert(txn).await
}

/// Write marked results back to a selection
pub async fn update_selection_marks(
    txn: &DatabaseTransaction,
    dto: SelectionMarkUpdate,
) -> Result<(), sea_orm::DbErr> {
    let update = lavery_selections::ActiveModel {
        id: Set(dto.selection_id),
        team_one_won: Set(Some(dto.team_one_won)),
        team_two_won: Set(Some(dto.team_two_won)),
        advanced: Set(dto.advanced),
        ..Default::default()
    };
    lavery_selections::Entity::update(update).exec(txn).await?;
    Ok(())
}

/// Teams a player has already used this season
pub async fn find_used_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    player_id: i64,
) -> Result<Vec<lavery_used_teams::Model>, sea_orm::DbErr> {
    lavery_used_teams::Entity::find()
        .filter(lavery_used_teams::Column::SeasonId.eq(season_id))
        .filter(lavery_used_teams::Column::PlayerId.eq(player_id))
        .all(conn)
        .await
}

/// Ledger a pair of used teams for a player
pub async fn insert_used_teams(
    txn: &DatabaseTransaction,
    season_id: i64,
    player_id: i64,
    teams: &[String],
) -> Result<(), sea_orm::DbErr> {
    if teams.is_empty() {
        return Ok(());
    }
    let models = teams.iter().map(|team| lavery_used_teams::ActiveModel {
        id: sea_orm::NotSet,
        season_id: Set(season_id),
        player_id: Set(player_id),
        team: Set(team.clone()),
    });
    lavery_used_teams::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

/// Drop specific teams from a player's ledger (selection resubmission)
pub async fn delete_used_teams(
    txn: &DatabaseTransaction,
    season_id: i64,
    player_id: i64,
    teams: &[String],
) -> Result<(), sea_orm::DbErr> {
    if teams.is_empty() {
        return Ok(());
    }
    lavery_used_teams::Entity::delete_many()
        .filter(lavery_used_teams::Column::SeasonId.eq(season_id))
        .filter(lavery_used_teams::Column::PlayerId.eq(player_id))
        .filter(lavery_used_teams::Column::Team.is_in(teams.iter().cloned()))
        .exec(txn)
        .await?;
    Ok(())
}

/// Wipe the whole cup for a season: selections, rounds, and the used-team
/// ledger. The destructive half of the deadlock reset.
pub async fn delete_season_cup(
    txn: &DatabaseTransaction,
    season_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let rounds = find_rounds_by_season(txn, season_id).await?;
    let round_ids: Vec<i64> = rounds.iter().map(|r| r.id).collect();

    if !round_ids.is_empty() {
        lavery_selections::Entity::delete_many()
            .filter(lavery_selections::Column::RoundId.is_in(round_ids.iter().copied()))
            .exec(txn)
            .await?;
    }
    lavery_rounds::Entity::delete_many()
        .filter(lavery_rounds::Column::SeasonId.eq(season_id))
        .exec(txn)
        .await?;
    lavery_used_teams::Entity::delete_many()
        .filter(lavery_used_teams::Column::SeasonId.eq(season_id))
        .exec(txn)
        .await?;
    Ok(())
}
