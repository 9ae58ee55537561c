//! Repository trait for data access
//!
//! This trait defines the key/value contract over the settings table.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Setting;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for persisted settings, one row per key
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Every stored row
    async fn find_all(&self) -> Result<Vec<Setting>>;

    /// Find a setting by key; `None` when the key was never persisted
    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>>;

    /// Create the row if absent, otherwise overwrite its value
    async fn upsert(&self, key: &str, value: &str) -> Result<Setting>;

    /// Remove every row
    async fn delete_all(&self) -> Result<()>;
}
