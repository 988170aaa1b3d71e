#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use db::txn::with_txn;
pub use domain::clock::{Clock, FixedClock, SystemClock};
pub use domain::week_status::WeekStatus;
pub use error::AppError;
pub use infra::db::connect_db;
pub use services::{
    GeorgeCupService, LaveryCupService, PredictionService, ResultEntry, ScoringService,
    WeekService,
};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
