//! Domain service - reconciles stored key/value rows with typed settings

use super::conversion::{format_value, parse_bool, parse_int, to_field_value};
use super::defaults::{keys, DefaultRegistry};
use super::extractor::InboundExtractor;
use super::repository::SettingsRepository;
use super::sink::InboundSink;
use super::validation::{load_time_location, normalize_base_path};
use crate::config::Config;
use crate::contract::{AllSetting, CallerIdentity, PersistenceFailure, SettingsError, SettingsRecord};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Arc;

/// Domain service for panel settings
pub struct Service {
    settings_repo: Arc<dyn SettingsRepository>,
    defaults: DefaultRegistry,
    extractor: InboundExtractor,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        settings_repo: Arc<dyn SettingsRepository>,
        defaults: DefaultRegistry,
        extractor: InboundExtractor,
    ) -> Self {
        Self {
            settings_repo,
            defaults,
            extractor,
        }
    }

    /// Build a service with a fresh default registry, as described by `config`
    pub fn from_config(
        settings_repo: Arc<dyn SettingsRepository>,
        inbound_sink: Arc<dyn InboundSink>,
        config: &Config,
    ) -> Self {
        Self::new(
            settings_repo,
            DefaultRegistry::generate(config.secret_length),
            InboundExtractor::new(inbound_sink, config.tolerate_port_conflicts),
        )
    }

    // ===== Whole-record Operations =====

    /// Every setting, stored values first and defaults for the rest
    pub async fn get_all_settings(&self) -> Result<AllSetting, SettingsError> {
        self.load_record().await
    }

    /// Validate `settings` and write every field, refreshing template inbounds
    pub async fn update_all_settings(
        &self,
        caller: &dyn CallerIdentity,
        settings: AllSetting,
    ) -> Result<(), SettingsError> {
        self.save_record(caller, settings).await
    }

    /// Delete every stored row; later reads see only defaults
    pub async fn reset_settings(&self) -> Result<(), SettingsError> {
        self.settings_repo
            .delete_all()
            .await
            .map_err(SettingsError::storage)?;
        tracing::info!("All panel settings reset to defaults");
        Ok(())
    }

    /// Reconcile stored rows and defaults into a record of type `R`
    ///
    /// Fails on the first conversion or schema error; no partial record is returned.
    pub async fn load_record<R: SettingsRecord>(&self) -> Result<R, SettingsError> {
        let settings = self
            .settings_repo
            .find_all()
            .await
            .map_err(SettingsError::storage)?;

        let mut record = R::default();
        let mut satisfied = HashSet::with_capacity(settings.len());
        for setting in &settings {
            assign_raw(&mut record, &setting.key, &setting.value)?;
            satisfied.insert(setting.key.as_str());
        }

        for (key, value) in self.defaults.entries() {
            if satisfied.contains(key) {
                continue;
            }
            assign_raw(&mut record, key, value)?;
        }

        Ok(record)
    }

    /// Validate `record` and upsert each field in schema order
    ///
    /// The template field is routed through the inbound extractor before it is
    /// written; an extractor failure stops the loop, leaving earlier fields in
    /// place. Write failures are collected and reported together.
    pub async fn save_record<R: SettingsRecord>(
        &self,
        caller: &dyn CallerIdentity,
        mut record: R,
    ) -> Result<(), SettingsError> {
        record.check_valid()?;

        let mut failures = Vec::new();
        for field in R::fields() {
            let value = format_value(&record.value_of(field.key)?);

            if field.key == keys::XRAY_TEMPLATE_CONFIG {
                let count = self.extractor.apply(caller, &value).await?;
                tracing::info!(count, "Template inbounds submitted");
            }

            if let Err(err) = self.settings_repo.upsert(field.key, &value).await {
                tracing::warn!(key = %field.key, error = %format!("{err:#}"), "Failed to save setting");
                failures.push(PersistenceFailure {
                    key: field.key.to_string(),
                    message: format!("{err:#}"),
                });
            }
        }

        if failures.is_empty() {
            tracing::info!(fields = R::fields().len(), "Panel settings updated");
            Ok(())
        } else {
            Err(SettingsError::Persistence { failures })
        }
    }

    // ===== Primitive Accessors =====

    /// Stored value of `key`, or its default when it was never persisted
    pub async fn get_string(&self, key: &str) -> Result<String, SettingsError> {
        let stored = self
            .settings_repo
            .find_by_key(key)
            .await
            .map_err(SettingsError::storage)?;

        match stored {
            Some(setting) => Ok(setting.value),
            None => self
                .defaults
                .default_for(key)
                .map(str::to_owned)
                .ok_or_else(|| SettingsError::UnknownKey {
                    key: key.to_string(),
                }),
        }
    }

    pub async fn set_string(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.settings_repo
            .upsert(key, value)
            .await
            .map(|_| ())
            .map_err(|err| SettingsError::Persistence {
                failures: vec![PersistenceFailure {
                    key: key.to_string(),
                    message: format!("{err:#}"),
                }],
            })
    }

    pub async fn get_int(&self, key: &str) -> Result<i64, SettingsError> {
        let raw = self.get_string(key).await?;
        parse_int(key, &raw)
    }

    pub async fn set_int(&self, key: &str, value: i64) -> Result<(), SettingsError> {
        self.set_string(key, &value.to_string()).await
    }

    pub async fn get_bool(&self, key: &str) -> Result<bool, SettingsError> {
        let raw = self.get_string(key).await?;
        parse_bool(key, &raw)
    }

    pub async fn set_bool(&self, key: &str, value: bool) -> Result<(), SettingsError> {
        self.set_string(key, &value.to_string()).await
    }

    // ===== Typed Accessors =====

    pub async fn get_xray_config_template(&self) -> Result<String, SettingsError> {
        self.get_string(keys::XRAY_TEMPLATE_CONFIG).await
    }

    pub async fn get_listen(&self) -> Result<String, SettingsError> {
        self.get_string(keys::WEB_LISTEN).await
    }

    pub async fn get_port(&self) -> Result<i64, SettingsError> {
        self.get_int(keys::WEB_PORT).await
    }

    pub async fn set_port(&self, port: i64) -> Result<(), SettingsError> {
        self.set_int(keys::WEB_PORT, port).await
    }

    pub async fn get_cert_file(&self) -> Result<String, SettingsError> {
        self.get_string(keys::WEB_CERT_FILE).await
    }

    pub async fn get_key_file(&self) -> Result<String, SettingsError> {
        self.get_string(keys::WEB_KEY_FILE).await
    }

    /// Web base path, always starting and ending with `/`
    pub async fn get_base_path(&self) -> Result<String, SettingsError> {
        let base_path = self.get_string(keys::WEB_BASE_PATH).await?;
        Ok(normalize_base_path(&base_path))
    }

    /// Session secret
    ///
    /// The first read of the generated default persists it so it survives
    /// restarts. Concurrent first reads may both write; they write the same value.
    pub async fn get_secret(&self) -> Result<String, SettingsError> {
        let secret = self.get_string(keys::SECRET).await?;
        if self.defaults.default_for(keys::SECRET) == Some(secret.as_str()) {
            if let Err(err) = self.set_string(keys::SECRET, &secret).await {
                tracing::warn!(error = %err, "Failed to save generated secret");
            }
        }
        Ok(secret)
    }

    /// Panel time zone, falling back to the default zone for unknown names
    pub async fn get_time_location(&self) -> Result<Tz, SettingsError> {
        let name = self.get_string(keys::TIME_LOCATION).await?;
        if let Some(tz) = load_time_location(&name) {
            return Ok(tz);
        }

        let fallback = self.defaults.default_for(keys::TIME_LOCATION).unwrap_or_default();
        tracing::error!(
            location = %name,
            default = %fallback,
            "Time location does not exist, using default location"
        );
        load_time_location(fallback).ok_or_else(|| SettingsError::Configuration {
            message: format!("default time location {fallback} does not exist"),
        })
    }

    pub async fn get_tg_bot_token(&self) -> Result<String, SettingsError> {
        self.get_string(keys::TG_BOT_TOKEN).await
    }

    pub async fn set_tg_bot_token(&self, token: &str) -> Result<(), SettingsError> {
        self.set_string(keys::TG_BOT_TOKEN, token).await
    }

    pub async fn get_tg_bot_chat_id(&self) -> Result<i64, SettingsError> {
        self.get_int(keys::TG_BOT_CHAT_ID).await
    }

    pub async fn set_tg_bot_chat_id(&self, chat_id: i64) -> Result<(), SettingsError> {
        self.set_int(keys::TG_BOT_CHAT_ID, chat_id).await
    }

    pub async fn get_tg_bot_enabled(&self) -> Result<bool, SettingsError> {
        self.get_bool(keys::TG_BOT_ENABLE).await
    }

    pub async fn set_tg_bot_enabled(&self, enabled: bool) -> Result<(), SettingsError> {
        self.set_bool(keys::TG_BOT_ENABLE, enabled).await
    }

    /// Cron-style schedule of the bot's periodic report
    pub async fn get_tg_bot_runtime(&self) -> Result<String, SettingsError> {
        self.get_string(keys::TG_RUN_TIME).await
    }

    pub async fn set_tg_bot_runtime(&self, runtime: &str) -> Result<(), SettingsError> {
        self.set_string(keys::TG_RUN_TIME, runtime).await
    }
}

/// Convert `raw` to the slot's kind and assign it; keys outside the schema are ignored
fn assign_raw<R: SettingsRecord>(record: &mut R, key: &str, raw: &str) -> Result<(), SettingsError> {
    let Some(field) = R::field(key) else {
        tracing::debug!(key = %key, "Ignoring setting outside the record schema");
        return Ok(());
    };
    let value = to_field_value(key, field.kind, raw)?;
    record.assign(key, value)
}
