use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a knockout fixture's winner was decided. Recorded so the persisted
/// coin flip stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "george_decided_by")]
pub enum DecisionMethod {
    #[sea_orm(string_value = "BYE")]
    Bye,
    #[sea_orm(string_value = "POINTS")]
    Points,
    #[sea_orm(string_value = "CORRECT_SCORES")]
    CorrectScores,
    #[sea_orm(string_value = "COIN_FLIP")]
    CoinFlip,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "george_fixtures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "round_id")]
    pub round_id: i64,
    #[sea_orm(column_name = "fixture_no")]
    pub fixture_no: i16,
    /// Null seat = bye or slot awaiting a preliminary winner.
    #[sea_orm(column_name = "home_player_id")]
    pub home_player_id: Option<i64>,
    #[sea_orm(column_name = "away_player_id")]
    pub away_player_id: Option<i64>,
    #[sea_orm(column_name = "winner_player_id")]
    pub winner_player_id: Option<i64>,
    #[sea_orm(column_name = "decided_by")]
    pub decided_by: Option<DecisionMethod>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::george_rounds::Entity",
        from = "Column::RoundId",
        to = "super::george_rounds::Column::Id"
    )]
    Round,
}

impl Related<super::george_rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
