use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_weeks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "season_id")]
    pub season_id: i64,
    #[sea_orm(column_name = "week_no")]
    pub week_no: i16,
    #[sea_orm(column_name = "predictions_open")]
    pub predictions_open: OffsetDateTime,
    #[sea_orm(column_name = "predictions_close")]
    pub predictions_close: OffsetDateTime,
    #[sea_orm(column_name = "live_start")]
    pub live_start: OffsetDateTime,
    #[sea_orm(column_name = "live_end")]
    pub live_end: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seasons::Entity",
        from = "Column::SeasonId",
        to = "super::seasons::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::fixtures::Entity")]
    Fixtures,
    #[sea_orm(has_many = "super::game_week_scores::Entity")]
    GameWeekScores,
}

impl Related<super::seasons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::fixtures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixtures.def()
    }
}

impl Related<super::game_week_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameWeekScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
