//! Module declaration and wiring

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::SettingsApi;
use crate::domain::{InboundSink, Service};
use crate::infra::storage::repositories::SeaOrmSettingsRepository;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Panel settings module
pub struct SettingsServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for SettingsServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl SettingsServiceModule {
    /// Wire repository, default registry and inbound sink into the domain service
    pub fn init(
        &self,
        cfg: Config,
        db: Arc<DatabaseConnection>,
        inbound_sink: Arc<dyn InboundSink>,
    ) -> Result<()> {
        let settings_repo = Arc::new(SeaOrmSettingsRepository::new(db));
        let service = Arc::new(Service::from_config(settings_repo, inbound_sink, &cfg));

        *self.config.write() = cfg;
        *self.service.write() = Some(service);

        tracing::info!("Panel settings module initialized");
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client over the initialized service
    pub fn client(&self) -> Result<Arc<dyn SettingsApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }
}
