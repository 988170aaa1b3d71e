#![allow(dead_code)]

pub mod factory;
pub mod schema;

use predpool::config::db::{DbOwner, DbProfile};
use predpool::{connect_db, AppError};
use sea_orm::DatabaseConnection;

/// Connect to the test database, ensuring its schema exists.
///
/// Returns `None` when the environment carries no test-database
/// configuration; callers skip rather than fail, so the rest of the suite
/// still runs on machines without Postgres.
pub async fn connect_test_db() -> Result<Option<DatabaseConnection>, AppError> {
    if std::env::var("PREDPOOL_TEST_DB").is_err() || std::env::var("APP_DB_USER").is_err() {
        eprintln!("skipping DB test: PREDPOOL_TEST_DB / APP_DB_USER not set");
        return Ok(None);
    }

    let conn = connect_db(DbProfile::Test, DbOwner::App).await?;
    schema::ensure(&conn).await?;
    Ok(Some(conn))
}
