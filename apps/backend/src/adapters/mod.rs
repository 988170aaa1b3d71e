//! SeaORM adapters: the only layer that issues queries.
//!
//! Adapters speak `sea_orm::DbErr`; repos translate into `DomainError`.

pub mod fixtures_sea;
pub mod game_weeks_sea;
pub mod george_sea;
pub mod lavery_sea;
pub mod players_sea;
pub mod predictions_sea;
pub mod scores_sea;
