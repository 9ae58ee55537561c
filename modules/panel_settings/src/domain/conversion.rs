//! String <-> native conversions for stored setting values

use crate::contract::{FieldKind, SettingValue, SettingsError};

/// Convert stored text into a slot value during record reconciliation
///
/// Booleans here are literal equality with `"true"`; anything else reads as false.
pub fn to_field_value(key: &str, kind: FieldKind, raw: &str) -> Result<SettingValue, SettingsError> {
    match kind {
        FieldKind::Integer => parse_int(key, raw).map(SettingValue::Integer),
        FieldKind::String => Ok(SettingValue::String(raw.to_string())),
        FieldKind::Boolean => Ok(SettingValue::Boolean(raw == "true")),
    }
}

/// Text form written back to storage
pub fn format_value(value: &SettingValue) -> String {
    match value {
        SettingValue::Integer(n) => n.to_string(),
        SettingValue::String(s) => s.clone(),
        SettingValue::Boolean(b) => b.to_string(),
    }
}

/// Base-10 signed integer
pub fn parse_int(key: &str, raw: &str) -> Result<i64, SettingsError> {
    raw.parse::<i64>().map_err(|e| SettingsError::Conversion {
        key: key.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Strict boolean accepting the usual spellings of true/false
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, SettingsError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(SettingsError::Conversion {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "invalid boolean".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_slot_rejects_non_numeric_text() {
        assert_eq!(
            to_field_value("webPort", FieldKind::Integer, "2053"),
            Ok(SettingValue::Integer(2053))
        );
        assert!(matches!(
            to_field_value("webPort", FieldKind::Integer, "80a"),
            Err(SettingsError::Conversion { .. })
        ));
        assert!(parse_int("webPort", "").is_err());
        assert_eq!(parse_int("tgBotChatId", "-1001"), Ok(-1001));
    }

    #[test]
    fn test_boolean_slot_is_literal_true() {
        assert_eq!(
            to_field_value("tgBotEnable", FieldKind::Boolean, "true"),
            Ok(SettingValue::Boolean(true))
        );
        // reconciliation only recognizes the exact literal
        assert_eq!(
            to_field_value("tgBotEnable", FieldKind::Boolean, "True"),
            Ok(SettingValue::Boolean(false))
        );
        assert_eq!(
            to_field_value("tgBotEnable", FieldKind::Boolean, "yes"),
            Ok(SettingValue::Boolean(false))
        );
    }

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool("k", raw), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool("k", raw), Ok(false), "{raw}");
        }
        assert!(parse_bool("k", "yes").is_err());
        assert!(parse_bool("k", "").is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&SettingValue::Integer(-7)), "-7");
        assert_eq!(format_value(&SettingValue::Boolean(false)), "false");
        assert_eq!(format_value(&SettingValue::String("/x/".into())), "/x/");
    }
}
