//! Consistency rules for submitted settings records

use crate::contract::{AllSetting, SettingsError};
use chrono_tz::Tz;
use std::fs::File;
use std::net::IpAddr;
use std::path::Path;

/// Wrap a base path in leading and trailing `/`
pub fn normalize_base_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Resolve an IANA zone name; the empty name is UTC
pub fn load_time_location(name: &str) -> Option<Tz> {
    if name.is_empty() {
        return Some(Tz::UTC);
    }
    name.parse::<Tz>().ok()
}

fn invalid(message: String) -> SettingsError {
    SettingsError::Validation { message }
}

/// Validate `setting`, normalizing the base path in place
pub fn check_all_setting(setting: &mut AllSetting) -> Result<(), SettingsError> {
    if !setting.web_listen.is_empty() && setting.web_listen.parse::<IpAddr>().is_err() {
        return Err(invalid(format!(
            "web listen is not a valid ip: {}",
            setting.web_listen
        )));
    }

    if !(1..=65535).contains(&setting.web_port) {
        return Err(invalid(format!(
            "web port is not a valid port: {}",
            setting.web_port
        )));
    }

    if !setting.web_cert_file.is_empty() || !setting.web_key_file.is_empty() {
        check_key_pair(&setting.web_cert_file, &setting.web_key_file)?;
    }

    setting.web_base_path = normalize_base_path(&setting.web_base_path);

    if load_time_location(&setting.time_location).is_none() {
        return Err(invalid(format!(
            "time location does not exist: {}",
            setting.time_location
        )));
    }

    Ok(())
}

fn check_key_pair(cert_file: &str, key_file: &str) -> Result<(), SettingsError> {
    if cert_file.is_empty() || key_file.is_empty() {
        return Err(invalid(format!(
            "cert file <{cert_file}> and key file <{key_file}> must be set together"
        )));
    }
    for (label, file) in [("cert", cert_file), ("key", key_file)] {
        if !Path::new(file).is_file() {
            return Err(invalid(format!("{label} file <{file}> does not exist")));
        }
        if let Err(err) = File::open(file) {
            return Err(invalid(format!("{label} file <{file}> is not readable: {err}")));
        }
    }
    Ok(())
}
