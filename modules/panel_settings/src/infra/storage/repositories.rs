//! SeaORM repository implementations

use crate::contract::Setting;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::{entity, mapper};

// ===== Settings Repository =====

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, key: &str) -> Result<Option<entity::Model>> {
        Ok(entity::Entity::find()
            .filter(entity::Column::Key.eq(key))
            .one(&*self.db)
            .await?)
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_all(&self) -> Result<Vec<Setting>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>> {
        Ok(self.find_model(key).await?.map(|e| e.into()))
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Setting> {
        let result = match self.find_model(key).await? {
            // Update existing
            Some(existing) => {
                entity::Entity::update(mapper::updated_active_model(existing, value))
                    .exec(&*self.db)
                    .await?
            }
            // Insert new
            None => {
                entity::Entity::insert(mapper::new_active_model(key, value))
                    .exec_with_returning(&*self.db)
                    .await?
            }
        };

        Ok(result.into())
    }

    async fn delete_all(&self) -> Result<()> {
        let deleted = entity::Entity::delete_many().exec(&*self.db).await?;
        tracing::debug!(rows = deleted.rows_affected, "Deleted all settings rows");
        Ok(())
    }
}
