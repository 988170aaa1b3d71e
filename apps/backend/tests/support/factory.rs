//! Row seeding helpers for DB tests.
//!
//! Everything goes through the entity ActiveModels so seeded rows look
//! exactly like production writes. Names carry a nanosecond marker so
//! binaries sharing one database never collide.

use predpool::entities::{fixtures, game_weeks, players, seasons};
use predpool::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::{Duration, OffsetDateTime};

/// A prefix plus a nanosecond timestamp, unique enough for test rows.
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    format!("{prefix}-{nanos}")
}

pub async fn seed_season(conn: &(impl ConnectionTrait + Send)) -> Result<i64, AppError> {
    seed_season_named(conn, &unique_name("season")).await
}

pub async fn seed_season_named(
    conn: &(impl ConnectionTrait + Send),
    name: &str,
) -> Result<i64, AppError> {
    let season = seasons::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    Ok(season.insert(conn).await?.id)
}

pub async fn count_seasons_by_name(
    conn: &(impl ConnectionTrait + Send),
    name: &str,
) -> Result<u64, AppError> {
    Ok(seasons::Entity::find()
        .filter(seasons::Column::Name.eq(name))
        .count(conn)
        .await?)
}

pub async fn seed_player(
    conn: &(impl ConnectionTrait + Send),
    season_id: i64,
    display_name: &str,
) -> Result<i64, AppError> {
    let player = players::ActiveModel {
        id: NotSet,
        season_id: Set(season_id),
        display_name: Set(display_name.to_string()),
    };
    Ok(player.insert(conn).await?.id)
}

/// Seed a game week whose windows are all in the past, so results can be
/// entered for it.
pub async fn seed_finished_game_week(
    conn: &(impl ConnectionTrait + Send),
    season_id: i64,
    week_no: i16,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let week = game_weeks::ActiveModel {
        id: NotSet,
        season_id: Set(season_id),
        week_no: Set(week_no),
        predictions_open: Set(now - Duration::days(3)),
        predictions_close: Set(now - Duration::days(1)),
        live_start: Set(now - Duration::hours(20)),
        live_end: Set(now - Duration::hours(2)),
    };
    Ok(week.insert(conn).await?.id)
}

pub async fn seed_fixture(
    conn: &(impl ConnectionTrait + Send),
    game_week_id: i64,
    ordinal: i16,
    home_team: &str,
    away_team: &str,
) -> Result<i64, AppError> {
    let fixture = fixtures::ActiveModel {
        id: NotSet,
        game_week_id: Set(game_week_id),
        ordinal: Set(ordinal),
        home_team: Set(home_team.to_string()),
        away_team: Set(away_team.to_string()),
        home_score: Set(None),
        away_score: Set(None),
    };
    Ok(fixture.insert(conn).await?.id)
}
