//! SeaORM entity for the settings table

use sea_orm::entity::prelude::*;

/// Settings table entity, one row per key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Surrogate key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// External setting key
    #[sea_orm(unique)]
    pub key: String,

    /// Serialized value
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
