//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{AllSetting, CallerContext, SettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use chrono_tz::Tz;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process communication; the web layer and the bot scheduler
/// both talk to settings through this client.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn get_all_settings(&self) -> Result<AllSetting, SettingsError> {
        self.service.get_all_settings().await
    }

    async fn update_all_settings(
        &self,
        caller: &CallerContext,
        settings: AllSetting,
    ) -> Result<(), SettingsError> {
        self.service.update_all_settings(caller, settings).await
    }

    async fn reset_settings(&self) -> Result<(), SettingsError> {
        self.service.reset_settings().await
    }

    async fn get_base_path(&self) -> Result<String, SettingsError> {
        self.service.get_base_path().await
    }

    async fn get_secret(&self) -> Result<String, SettingsError> {
        self.service.get_secret().await
    }

    async fn get_time_location(&self) -> Result<Tz, SettingsError> {
        self.service.get_time_location().await
    }
}
