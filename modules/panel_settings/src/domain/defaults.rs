//! Compiled-in default values, keyed by external setting key

use rand::{distr::Alphanumeric, Rng};

/// External keys of every known setting
pub mod keys {
    pub const XRAY_TEMPLATE_CONFIG: &str = "xrayTemplateConfig";
    pub const WEB_LISTEN: &str = "webListen";
    pub const WEB_PORT: &str = "webPort";
    pub const WEB_CERT_FILE: &str = "webCertFile";
    pub const WEB_KEY_FILE: &str = "webKeyFile";
    pub const SECRET: &str = "secret";
    pub const WEB_BASE_PATH: &str = "webBasePath";
    pub const TIME_LOCATION: &str = "timeLocation";
    pub const TG_BOT_ENABLE: &str = "tgBotEnable";
    pub const TG_BOT_TOKEN: &str = "tgBotToken";
    pub const TG_BOT_CHAT_ID: &str = "tgBotChatId";
    pub const TG_RUN_TIME: &str = "tgRunTime";
}

/// Bundled xray configuration template
pub const XRAY_TEMPLATE_CONFIG: &str = include_str!("xray_template.json");

pub const DEFAULT_SECRET_LENGTH: usize = 32;

/// Every key with a default, in registry order
const REGISTRY_KEYS: [&str; 12] = [
    keys::XRAY_TEMPLATE_CONFIG,
    keys::WEB_LISTEN,
    keys::WEB_PORT,
    keys::WEB_CERT_FILE,
    keys::WEB_KEY_FILE,
    keys::SECRET,
    keys::WEB_BASE_PATH,
    keys::TIME_LOCATION,
    keys::TG_BOT_ENABLE,
    keys::TG_BOT_TOKEN,
    keys::TG_BOT_CHAT_ID,
    keys::TG_RUN_TIME,
];

/// Fallback values for keys that were never persisted
///
/// Everything is static except the secret, which is drawn once when the
/// registry is built and then stays fixed for the registry's lifetime.
#[derive(Debug, Clone)]
pub struct DefaultRegistry {
    secret: String,
}

impl DefaultRegistry {
    /// Registry with a freshly generated secret of `secret_length` characters
    pub fn generate(secret_length: usize) -> Self {
        Self {
            secret: random_seq(secret_length),
        }
    }

    /// Registry with a caller-chosen secret default
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Default value for `key`
    pub fn default_for(&self, key: &str) -> Option<&str> {
        let value = match key {
            keys::XRAY_TEMPLATE_CONFIG => XRAY_TEMPLATE_CONFIG,
            keys::WEB_LISTEN => "",
            keys::WEB_PORT => "2053",
            keys::WEB_CERT_FILE => "",
            keys::WEB_KEY_FILE => "",
            keys::SECRET => self.secret.as_str(),
            keys::WEB_BASE_PATH => "/",
            keys::TIME_LOCATION => "Asia/Tehran",
            keys::TG_BOT_ENABLE => "false",
            keys::TG_BOT_TOKEN => "",
            keys::TG_BOT_CHAT_ID => "0",
            keys::TG_RUN_TIME => "",
            _ => return None,
        };
        Some(value)
    }

    /// All `(key, default)` pairs in registry order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        REGISTRY_KEYS
            .iter()
            .filter_map(move |key| self.default_for(key).map(|value| (*key, value)))
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::generate(DEFAULT_SECRET_LENGTH)
    }
}

fn random_seq(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
