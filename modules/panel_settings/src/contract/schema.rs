//! Record schema contract
//!
//! A typed settings record declares its slots as an ordered, static list of
//! `(external key, kind)` pairs. Reconciliation walks that list instead of
//! inspecting the record at runtime.

use super::error::SettingsError;

/// Native type of a schema slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
    Boolean,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
        }
    }
}

/// One slot of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// External key the slot is stored under
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self { key, kind }
    }
}

/// Converted value of one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Integer(i64),
    String(String),
    Boolean(bool),
}

impl SettingValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::String(_) => FieldKind::String,
            Self::Boolean(_) => FieldKind::Boolean,
        }
    }
}

/// A strongly-typed record round-tripped through string key/value rows
pub trait SettingsRecord: Default + Send {
    /// Slots in write order
    fn fields() -> &'static [FieldSpec];

    /// Slot stored under `key`, if the schema knows it
    fn field(key: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.key == key)
    }

    /// Store a converted value; a value that does not fit the slot is a schema defect
    fn assign(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError>;

    /// Current value of the slot stored under `key`
    fn value_of(&self, key: &str) -> Result<SettingValue, SettingsError>;

    /// Structural consistency rules, run before any write
    fn check_valid(&mut self) -> Result<(), SettingsError> {
        Ok(())
    }
}
