use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Knockout round lifecycle. Transitions are host-triggered and one-way:
/// NotStarted -> Active (drawn) -> Completed (all winners decided).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "george_round_state")]
pub enum RoundState {
    #[sea_orm(string_value = "NOT_STARTED")]
    NotStarted,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "george_rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "season_id")]
    pub season_id: i64,
    #[sea_orm(column_name = "round_no")]
    pub round_no: i16,
    pub name: String,
    /// Week whose scores decide this round's fixtures.
    #[sea_orm(column_name = "game_week_id")]
    pub game_week_id: Option<i64>,
    pub state: RoundState,
    #[sea_orm(column_name = "fixture_count")]
    pub fixture_count: i16,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seasons::Entity",
        from = "Column::SeasonId",
        to = "super::seasons::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::george_fixtures::Entity")]
    Fixtures,
}

impl Related<super::seasons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::george_fixtures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixtures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
