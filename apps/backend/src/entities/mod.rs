//! SeaORM entity models for the prediction pool schema.

pub mod fixtures;
pub mod game_week_scores;
pub mod game_weeks;
pub mod george_fixtures;
pub mod george_rounds;
pub mod lavery_rounds;
pub mod lavery_selections;
pub mod lavery_used_teams;
pub mod players;
pub mod predictions;
pub mod season_scores;
pub mod seasons;
