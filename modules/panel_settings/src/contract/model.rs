//! Contract models for the panel settings service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Identity of the panel user that owns derived inbounds
pub type OwnerId = i64;

/// One persisted key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// External key (unique)
    pub key: String,
    /// Serialized scalar or JSON document
    pub value: String,
}

impl Setting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Typed view over every user-editable panel setting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllSetting {
    pub web_listen: String,
    pub web_port: i64,
    pub web_cert_file: String,
    pub web_key_file: String,
    pub web_base_path: String,
    pub tg_bot_enable: bool,
    pub tg_bot_token: String,
    pub tg_bot_chat_id: i64,
    pub tg_run_time: String,
    pub xray_template_config: String,
    pub time_location: String,
}

/// Inbound protocol tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    VMess,
    VLess,
    Dokodemo,
    Http,
    Trojan,
    Shadowsocks,
    /// Any tag the panel does not know about, carried verbatim
    Other(String),
}

impl Protocol {
    pub fn as_str(&self) -> &str {
        match self {
            Self::VMess => "vmess",
            Self::VLess => "vless",
            Self::Dokodemo => "dokodemo-door",
            Self::Http => "http",
            Self::Trojan => "trojan",
            Self::Shadowsocks => "shadowsocks",
            Self::Other(tag) => tag,
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for Protocol {
    fn from(tag: &str) -> Self {
        match tag {
            "vmess" => Self::VMess,
            "vless" => Self::VLess,
            "dokodemo-door" => Self::Dokodemo,
            "http" => Self::Http,
            "trojan" => Self::Trojan,
            "shadowsocks" => Self::Shadowsocks,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listener definition derived from the xray template
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inbound {
    /// Owner taken from the caller, never from the template
    pub user_id: OwnerId,
    pub up: i64,
    pub down: i64,
    pub total: i64,
    pub remark: String,
    pub enable: bool,
    /// Expiry as unix milliseconds, 0 for none
    pub expiry_time: i64,
    pub listen: String,
    pub port: i64,
    pub protocol: Protocol,
    /// Compact JSON text
    pub settings: String,
    /// Compact JSON text
    pub stream_settings: String,
    pub tag: String,
    /// Compact JSON text
    pub sniffing: String,
}

/// Source of the identity attached to derived inbounds
pub trait CallerIdentity: Send + Sync {
    fn owner_id(&self) -> OwnerId;
}

/// Identity of the logged-in caller of a settings operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallerContext {
    pub user_id: OwnerId,
}

impl CallerContext {
    pub fn new(user_id: OwnerId) -> Self {
        Self { user_id }
    }
}

impl CallerIdentity for CallerContext {
    fn owner_id(&self) -> OwnerId {
        self.user_id
    }
}
