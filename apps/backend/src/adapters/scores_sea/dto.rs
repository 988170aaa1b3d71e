//! DTOs for scores_sea adapter.

/// DTO for one weekly score row in a wholesale replace.
#[derive(Debug, Clone)]
pub struct WeekScoreCreate {
    pub game_week_id: i64,
    pub player_id: i64,
    pub correct_scores: i16,
    pub points: i32,
}

/// DTO for one season score row in a wholesale replace.
#[derive(Debug, Clone)]
pub struct SeasonScoreCreate {
    pub season_id: i64,
    pub player_id: i64,
    pub correct_scores: i16,
    pub points: i32,
}
