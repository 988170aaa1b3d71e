//! Idempotent schema bootstrap for the test database.
//!
//! The crate runs no migrations itself, so the DB suite creates the tables
//! it needs up front. Everything here is `IF NOT EXISTS` (with the usual
//! `duplicate_object` dance for Postgres enum types), so it is safe to run
//! from every test binary. DDL runs on the plain connection, outside the
//! rollback-on-ok transaction harness, and therefore persists.

use predpool::AppError;
use sea_orm::ConnectionTrait;

const ENUM_TYPES: &[&str] = &[
    "DO $$ BEGIN \
        CREATE TYPE prediction_source AS ENUM ('PLAYER', 'DEFAULT'); \
    EXCEPTION WHEN duplicate_object THEN NULL; END $$",
    "DO $$ BEGIN \
        CREATE TYPE george_round_state AS ENUM ('NOT_STARTED', 'ACTIVE', 'COMPLETED'); \
    EXCEPTION WHEN duplicate_object THEN NULL; END $$",
    "DO $$ BEGIN \
        CREATE TYPE george_decided_by AS ENUM ('BYE', 'POINTS', 'CORRECT_SCORES', 'COIN_FLIP'); \
    EXCEPTION WHEN duplicate_object THEN NULL; END $$",
];

const TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS seasons (\
        id BIGSERIAL PRIMARY KEY, \
        name TEXT NOT NULL, \
        created_at TIMESTAMPTZ NOT NULL)",
    "CREATE TABLE IF NOT EXISTS players (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        display_name TEXT NOT NULL)",
    "CREATE TABLE IF NOT EXISTS game_weeks (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        week_no SMALLINT NOT NULL, \
        predictions_open TIMESTAMPTZ NOT NULL, \
        predictions_close TIMESTAMPTZ NOT NULL, \
        live_start TIMESTAMPTZ NOT NULL, \
        live_end TIMESTAMPTZ NOT NULL)",
    "CREATE TABLE IF NOT EXISTS fixtures (\
        id BIGSERIAL PRIMARY KEY, \
        game_week_id BIGINT NOT NULL REFERENCES game_weeks(id), \
        ordinal SMALLINT NOT NULL, \
        home_team TEXT NOT NULL, \
        away_team TEXT NOT NULL, \
        home_score SMALLINT, \
        away_score SMALLINT)",
    "CREATE TABLE IF NOT EXISTS predictions (\
        id BIGSERIAL PRIMARY KEY, \
        player_id BIGINT NOT NULL REFERENCES players(id), \
        fixture_id BIGINT NOT NULL REFERENCES fixtures(id), \
        home_goals SMALLINT NOT NULL, \
        away_goals SMALLINT NOT NULL, \
        source prediction_source NOT NULL, \
        UNIQUE (player_id, fixture_id))",
    "CREATE TABLE IF NOT EXISTS game_week_scores (\
        id BIGSERIAL PRIMARY KEY, \
        game_week_id BIGINT NOT NULL REFERENCES game_weeks(id), \
        player_id BIGINT NOT NULL REFERENCES players(id), \
        correct_scores SMALLINT NOT NULL, \
        points INTEGER NOT NULL)",
    "CREATE TABLE IF NOT EXISTS season_scores (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        player_id BIGINT NOT NULL REFERENCES players(id), \
        correct_scores SMALLINT NOT NULL, \
        points INTEGER NOT NULL)",
    "CREATE TABLE IF NOT EXISTS george_rounds (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        round_no SMALLINT NOT NULL, \
        name TEXT NOT NULL, \
        game_week_id BIGINT REFERENCES game_weeks(id), \
        state george_round_state NOT NULL, \
        fixture_count SMALLINT NOT NULL, \
        created_at TIMESTAMPTZ NOT NULL)",
    "CREATE TABLE IF NOT EXISTS george_fixtures (\
        id BIGSERIAL PRIMARY KEY, \
        round_id BIGINT NOT NULL REFERENCES george_rounds(id), \
        fixture_no SMALLINT NOT NULL, \
        home_player_id BIGINT REFERENCES players(id), \
        away_player_id BIGINT REFERENCES players(id), \
        winner_player_id BIGINT REFERENCES players(id), \
        decided_by george_decided_by)",
    "CREATE TABLE IF NOT EXISTS lavery_rounds (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        round_no SMALLINT NOT NULL, \
        name TEXT NOT NULL, \
        game_week_id BIGINT REFERENCES game_weeks(id), \
        completed BOOLEAN NOT NULL)",
    "CREATE TABLE IF NOT EXISTS lavery_selections (\
        id BIGSERIAL PRIMARY KEY, \
        round_id BIGINT NOT NULL REFERENCES lavery_rounds(id), \
        player_id BIGINT NOT NULL REFERENCES players(id), \
        team_one TEXT NOT NULL, \
        team_two TEXT NOT NULL, \
        team_one_won BOOLEAN, \
        team_two_won BOOLEAN, \
        advanced BOOLEAN NOT NULL)",
    "CREATE TABLE IF NOT EXISTS lavery_used_teams (\
        id BIGSERIAL PRIMARY KEY, \
        season_id BIGINT NOT NULL REFERENCES seasons(id), \
        player_id BIGINT NOT NULL REFERENCES players(id), \
        team TEXT NOT NULL)",
];

/// Create the enum types and tables the suite touches, if absent.
pub async fn ensure(conn: &impl ConnectionTrait) -> Result<(), AppError> {
    for stmt in ENUM_TYPES.iter().chain(TABLES.iter()) {
        conn.execute_unprepared(stmt).await?;
    }
    Ok(())
}
