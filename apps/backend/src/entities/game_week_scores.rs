use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Derived weekly totals. Replaced wholesale on every scoring run, never
/// patched incrementally.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_week_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_week_id")]
    pub game_week_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "correct_scores")]
    pub correct_scores: i16,
    pub points: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_weeks::Entity",
        from = "Column::GameWeekId",
        to = "super::game_weeks::Column::Id"
    )]
    GameWeek,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::game_weeks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameWeek.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
