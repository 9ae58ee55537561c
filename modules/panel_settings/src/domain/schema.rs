//! Record schema of `AllSetting`

use super::defaults::keys;
use super::validation;
use crate::contract::{AllSetting, FieldKind, FieldSpec, SettingValue, SettingsError, SettingsRecord};

static ALL_SETTING_FIELDS: [FieldSpec; 11] = [
    FieldSpec::new(keys::WEB_LISTEN, FieldKind::String),
    FieldSpec::new(keys::WEB_PORT, FieldKind::Integer),
    FieldSpec::new(keys::WEB_CERT_FILE, FieldKind::String),
    FieldSpec::new(keys::WEB_KEY_FILE, FieldKind::String),
    FieldSpec::new(keys::WEB_BASE_PATH, FieldKind::String),
    FieldSpec::new(keys::TG_BOT_ENABLE, FieldKind::Boolean),
    FieldSpec::new(keys::TG_BOT_TOKEN, FieldKind::String),
    FieldSpec::new(keys::TG_BOT_CHAT_ID, FieldKind::Integer),
    FieldSpec::new(keys::TG_RUN_TIME, FieldKind::String),
    FieldSpec::new(keys::XRAY_TEMPLATE_CONFIG, FieldKind::String),
    FieldSpec::new(keys::TIME_LOCATION, FieldKind::String),
];

fn mismatch(key: &str, value: &SettingValue) -> SettingsError {
    SettingsError::Configuration {
        message: format!("field {key} cannot hold a {} value", value.kind()),
    }
}

fn unknown(key: &str) -> SettingsError {
    SettingsError::Configuration {
        message: format!("field {key} is declared but has no slot"),
    }
}

impl SettingsRecord for AllSetting {
    fn fields() -> &'static [FieldSpec] {
        &ALL_SETTING_FIELDS
    }

    fn assign(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError> {
        match (key, value) {
            (keys::WEB_LISTEN, SettingValue::String(s)) => self.web_listen = s,
            (keys::WEB_PORT, SettingValue::Integer(n)) => self.web_port = n,
            (keys::WEB_CERT_FILE, SettingValue::String(s)) => self.web_cert_file = s,
            (keys::WEB_KEY_FILE, SettingValue::String(s)) => self.web_key_file = s,
            (keys::WEB_BASE_PATH, SettingValue::String(s)) => self.web_base_path = s,
            (keys::TG_BOT_ENABLE, SettingValue::Boolean(b)) => self.tg_bot_enable = b,
            (keys::TG_BOT_TOKEN, SettingValue::String(s)) => self.tg_bot_token = s,
            (keys::TG_BOT_CHAT_ID, SettingValue::Integer(n)) => self.tg_bot_chat_id = n,
            (keys::TG_RUN_TIME, SettingValue::String(s)) => self.tg_run_time = s,
            (keys::XRAY_TEMPLATE_CONFIG, SettingValue::String(s)) => self.xray_template_config = s,
            (keys::TIME_LOCATION, SettingValue::String(s)) => self.time_location = s,
            (key, value) if Self::field(key).is_some() => return Err(mismatch(key, &value)),
            (key, _) => return Err(unknown(key)),
        }
        Ok(())
    }

    fn value_of(&self, key: &str) -> Result<SettingValue, SettingsError> {
        let value = match key {
            keys::WEB_LISTEN => SettingValue::String(self.web_listen.clone()),
            keys::WEB_PORT => SettingValue::Integer(self.web_port),
            keys::WEB_CERT_FILE => SettingValue::String(self.web_cert_file.clone()),
            keys::WEB_KEY_FILE => SettingValue::String(self.web_key_file.clone()),
            keys::WEB_BASE_PATH => SettingValue::String(self.web_base_path.clone()),
            keys::TG_BOT_ENABLE => SettingValue::Boolean(self.tg_bot_enable),
            keys::TG_BOT_TOKEN => SettingValue::String(self.tg_bot_token.clone()),
            keys::TG_BOT_CHAT_ID => SettingValue::Integer(self.tg_bot_chat_id),
            keys::TG_RUN_TIME => SettingValue::String(self.tg_run_time.clone()),
            keys::XRAY_TEMPLATE_CONFIG => SettingValue::String(self.xray_template_config.clone()),
            keys::TIME_LOCATION => SettingValue::String(self.time_location.clone()),
            other => return Err(unknown(other)),
        };
        Ok(value)
    }

    fn check_valid(&mut self) -> Result<(), SettingsError> {
        validation::check_all_setting(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_field_round_trips_through_its_slot() {
        let mut record = AllSetting::default();
        for field in AllSetting::fields() {
            let value = match field.kind {
                FieldKind::Integer => SettingValue::Integer(42),
                FieldKind::String => SettingValue::String(format!("v-{}", field.key)),
                FieldKind::Boolean => SettingValue::Boolean(true),
            };
            assert!(record.assign(field.key, value.clone()).is_ok(), "{}", field.key);
            assert_eq!(record.value_of(field.key), Ok(value));
        }
    }

    #[test]
    fn test_kind_mismatch_is_a_schema_error() {
        let mut record = AllSetting::default();
        let err = record.assign(keys::WEB_PORT, SettingValue::String("2053".into()));
        assert!(matches!(err, Err(SettingsError::Configuration { .. })));
    }

    #[test]
    fn test_secret_is_not_part_of_the_record() {
        assert!(AllSetting::field(keys::SECRET).is_none());
        assert!(AllSetting::field(keys::WEB_PORT).is_some());
    }
}
