//! SeaORM adapter for the George Cup knockout bracket.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::george_fixtures::{self, DecisionMethod};
use crate::entities::george_rounds::{self, RoundState};

pub mod dto;

pub use dto::{KnockoutFixtureCreate, RoundCreate};

/// Find all rounds of a season's bracket (ordered by round_no, then created_at)
pub async fn find_rounds_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<george_rounds::Model>, sea_orm::DbErr> {
    george_rounds::Entity::find()
        .filter(george_rounds::Column::SeasonId.eq(season_id))
        .order_by_asc(george_rounds::Column::RoundNo)
        .order_by_asc(george_rounds::Column::CreatedAt)
        .all(conn)
        .await
}

/// Find rounds whose outcome is driven by the given game week
pub async fn find_rounds_by_week<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_week_id: i64,
) -> Result<Vec<george_rounds::Model>, sea_orm::DbErr> {
    george_rounds::Entity::find()
        .filter(george_rounds::Column::GameWeekId.eq(game_week_id))
        .order_by_asc(george_rounds::Column::RoundNo)
        .all(conn)
        .await
}

/// Create a round in NotStarted state
pub async fn create_round(
    txn: &DatabaseTransaction,
    dto: RoundCreate,
) -> Result<george_rounds::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let round = george_rounds::ActiveModel {
        id: sea_orm::NotSet,
        season_id: Set(dto.season_id),
        round_no: Set(dto.round_no),
        name: Set(dto.name),
        game_week_id: Set(dto.game_week_id),
        state: Set(RoundState::NotStarted),
        fixture_count: Set(dto.fixture_count),
        created_at: Set(now),
    };
    round.insert(txn).await
}

/// Link a round to the game week that will decide it
pub async fn link_round_to_week(
    txn: &DatabaseTransaction,
    round_id: i64,
    game_week_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let update = george_rounds::ActiveModel {
        id: Set(round_id),
        game_week_id: Set(Some(game_week_id)),
        ..Default::default()
    };
    george_rounds::Entity::update(update).exec(txn).await?;
    Ok(())
}

/// Claim a round for drawing: NotStarted -> Active, conditionally.
///
/// Filters on the current state and reports whether a row was actually
/// claimed, so two concurrent draw attempts cannot both win.
pub async fn claim_round_for_draw(
    txn: &DatabaseTransaction,
    round_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    use sea_orm::sea_query::{Alias, Expr};

    let result = george_rounds::Entity::update_many()
        .col_expr(
            george_rounds::Column::State,
            Expr::val(RoundState::Active).cast_as(Alias::new("george_round_state")),
        )
        .filter(george_rounds::Column::Id.eq(round_id))
        .filter(george_rounds::Column::State.eq(RoundState::NotStarted))
        .exec(txn)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Mark a round Completed
pub async fn complete_round(
    txn: &DatabaseTransaction,
    round_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let update = george_rounds::ActiveModel {
        id: Set(round_id),
        state: Set(RoundState::Completed),
        ..Default::default()
    };
    george_rounds::Entity::update(update).exec(txn).await?;
    Ok(())
}

/// Delete duplicate round rows, keeping the earliest created per round_no.
///
/// Idempotency repair for a retried create, not a normal-path operation.
/// Returns the ids of the deleted rounds.
pub async fn delete_duplicate_rounds(
    txn: &DatabaseTransaction,
    season_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rounds = find_rounds_by_season(txn, season_id).await?;

    let mut doomed: Vec<i64> = Vec::new();
    let mut last_round_no: Option<i16> = None;
    for round in &rounds {
        // Rounds are sorted by (round_no, created_at); any repeat of a
        // round_no is a later-created duplicate.
        if last_round_no == Some(round.round_no) {
            doomed.push(round.id);
        } else {
            last_round_no = Some(round.round_no);
        }
    }

    if !doomed.is_empty() {
        george_fixtures::Entity::delete_many()
            .filter(george_fixtures::Column::RoundId.is_in(doomed.iter().copied()))
            .exec(txn)
            .await?;
        george_rounds::Entity::delete_many()
            .filter(george_rounds::Column::Id.is_in(doomed.iter().copied()))
            .exec(txn)
            .await?;
    }
    Ok(doomed)
}

/// Find all fixtures of a round (ordered by fixture_no)
pub async fn find_fixtures_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<george_fixtures::Model>, sea_orm::DbErr> {
    george_fixtures::Entity::find()
        .filter(george_fixtures::Column::RoundId.eq(round_id))
        .order_by_asc(george_fixtures::Column::FixtureNo)
        .all(conn)
        .await
}

/// Bulk-insert fixtures for a round
pub async fn insert_fixtures(
    txn: &DatabaseTransaction,
    dtos: Vec<KnockoutFixtureCreate>,
) -> Result<(), sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(());
    }
    let models = dtos.into_iter().map(|dto| george_fixtures::ActiveModel {
        id: sea_orm::NotSet,
        round_id: Set(dto.round_id),
        fixture_no: Set(dto.fixture_no),
        home_player_id: Set(dto.home_player_id),
        away_player_id: Set(dto.away_player_id),
        winner_player_id: Set(None),
        decided_by: Set(None),
    });
    george_fixtures::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

/// Seat a player into one side of a fixture
pub async fn seat_player(
    txn: &DatabaseTransaction,
    fixture_id: i64,
    home: bool,
    player_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let mut update = george_fixtures::ActiveModel {
        id: Set(fixture_id),
        ..Default::default()
    };
    if home {
        update.home_player_id = Set(Some(player_id));
    } else {
        update.away_player_id = Set(Some(player_id));
    }
    george_fixtures::Entity::update(update).exec(txn).await?;
    Ok(())
}

/// Record a fixture's winner and how it was decided
pub async fn set_winner(
    txn: &DatabaseTransaction,
    fixture_id: i64,
    winner_player_id: i64,
    decided_by: DecisionMethod,
) -> Result<(), sea_orm::DbErr> {
    let update = george_fixtures::ActiveModel {
        id: Set(fixture_id),
        winner_player_id: Set(Some(winner_player_id)),
        decided_by: Set(Some(decided_by)),
        ..Default::default()
    };
    george_fixtures::Entity::update(update).exec(txn).await?;
    Ok(())
}
