//! Repository layer: domain models over the SeaORM adapters.

pub mod fixtures;
pub mod game_weeks;
pub mod george;
pub mod lavery;
pub mod players;
pub mod predictions;
pub mod scores;
