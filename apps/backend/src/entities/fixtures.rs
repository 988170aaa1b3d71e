use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixtures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_week_id")]
    pub game_week_id: i64,
    /// Ordering index within the game week.
    pub ordinal: i16,
    #[sea_orm(column_name = "home_team")]
    pub home_team: String,
    #[sea_orm(column_name = "away_team")]
    pub away_team: String,
    #[sea_orm(column_name = "home_score")]
    pub home_score: Option<i16>,
    #[sea_orm(column_name = "away_score")]
    pub away_score: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_weeks::Entity",
        from = "Column::GameWeekId",
        to = "super::game_weeks::Column::Id"
    )]
    GameWeek,
    #[sea_orm(has_many = "super::predictions::Entity")]
    Predictions,
}

impl Related<super::game_weeks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameWeek.def()
    }
}

impl Related<super::predictions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Predictions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
