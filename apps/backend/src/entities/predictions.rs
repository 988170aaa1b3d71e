use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Where a prediction row came from.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "prediction_source")]
pub enum PredictionSource {
    /// Entered by the player inside the prediction window.
    #[sea_orm(string_value = "PLAYER")]
    Player,
    /// 0-0 default materialized at scoring time for an absent prediction.
    #[sea_orm(string_value = "DEFAULT")]
    Default,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "predictions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "fixture_id")]
    pub fixture_id: i64,
    #[sea_orm(column_name = "home_goals")]
    pub home_goals: i16,
    #[sea_orm(column_name = "away_goals")]
    pub away_goals: i16,
    pub source: PredictionSource,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::fixtures::Entity",
        from = "Column::FixtureId",
        to = "super::fixtures::Column::Id"
    )]
    Fixture,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::fixtures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
