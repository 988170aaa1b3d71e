//! Player repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub season_id: i64,
    pub display_name: String,
}

/// Find all players of a season
pub async fn find_all_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let players = players_sea::find_all_by_season(conn, season_id).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

/// Find a player by ID, failing with NotFound if absent
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    let player = players_sea::find_by_id(conn, player_id).await?;
    player.map(Player::from).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("player {player_id} does not exist"),
        )
    })
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            display_name: model.display_name,
        }
    }
}
