//! DTOs for lavery_sea adapter.

/// DTO for creating a survivor round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub season_id: i64,
    pub round_no: i16,
    pub name: String,
    pub game_week_id: Option<i64>,
}

/// DTO for creating or replacing a player's round selection.
#[derive(Debug, Clone)]
pub struct SelectionCreate {
    pub round_id: i64,
    pub player_id: i64,
    pub team_one: String,
    pub team_two: String,
}

/// DTO for writing a marked selection back.
#[derive(Debug, Clone)]
pub struct SelectionMarkUpdate {
    pub selection_id: i64,
    pub team_one_won: bool,
    pub team_two_won: bool,
    pub advanced: bool,
}
