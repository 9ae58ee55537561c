//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::Setting;

impl From<entity::Model> for Setting {
    fn from(entity: entity::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
        }
    }
}

/// Active model for a brand new row; the id is assigned by the database
pub fn new_active_model(key: &str, value: &str) -> entity::ActiveModel {
    use sea_orm::ActiveValue::{NotSet, Set};

    entity::ActiveModel {
        id: NotSet,
        key: Set(key.to_string()),
        value: Set(value.to_string()),
    }
}

/// Active model overwriting the value of an existing row
pub fn updated_active_model(existing: entity::Model, value: &str) -> entity::ActiveModel {
    use sea_orm::ActiveValue::{Set, Unchanged};

    entity::ActiveModel {
        id: Unchanged(existing.id),
        key: Unchanged(existing.key),
        value: Set(value.to_string()),
    }
}
