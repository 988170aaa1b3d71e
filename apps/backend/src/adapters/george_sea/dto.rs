//! DTOs for george_sea adapter.

/// DTO for creating a knockout round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub season_id: i64,
    pub round_no: i16,
    pub name: String,
    pub game_week_id: Option<i64>,
    pub fixture_count: i16,
}

/// DTO for creating a knockout fixture.
#[derive(Debug, Clone)]
pub struct KnockoutFixtureCreate {
    pub round_id: i64,
    pub fixture_no: i16,
    pub home_player_id: Option<i64>,
    pub away_player_id: Option<i64>,
}
