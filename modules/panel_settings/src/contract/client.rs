//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and write panel settings.
//! NO HTTP - direct function calls for performance.

use super::{
    error::SettingsError,
    model::{AllSetting, CallerContext},
};
use async_trait::async_trait;
use chrono_tz::Tz;

/// Panel settings API for inter-module communication
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Every setting reconciled against the defaults
    async fn get_all_settings(&self) -> Result<AllSetting, SettingsError>;

    /// Validate and persist a full record, refreshing template inbounds
    async fn update_all_settings(
        &self,
        caller: &CallerContext,
        settings: AllSetting,
    ) -> Result<(), SettingsError>;

    /// Drop every stored setting
    async fn reset_settings(&self) -> Result<(), SettingsError>;

    /// Web base path, always wrapped in `/`
    async fn get_base_path(&self) -> Result<String, SettingsError>;

    /// Session signing secret, stable once read
    async fn get_secret(&self) -> Result<String, SettingsError>;

    /// Panel time zone
    async fn get_time_location(&self) -> Result<Tz, SettingsError>;
}
