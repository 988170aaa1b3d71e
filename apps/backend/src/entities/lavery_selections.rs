use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lavery_selections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "round_id")]
    pub round_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "team_one")]
    pub team_one: String,
    #[sea_orm(column_name = "team_two")]
    pub team_two: String,
    /// Null until the round is marked.
    #[sea_orm(column_name = "team_one_won")]
    pub team_one_won: Option<bool>,
    #[sea_orm(column_name = "team_two_won")]
    pub team_two_won: Option<bool>,
    pub advanced: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lavery_rounds::Entity",
        from = "Column::RoundId",
        to = "super::lavery_rounds::Column::Id"
    )]
    Round,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::lavery_rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
