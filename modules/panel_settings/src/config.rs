//! Configuration for the panel settings module

use serde::Deserialize;

/// Panel settings module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Length of the generated default session secret
    #[serde(default = "default_secret_length")]
    pub secret_length: usize,

    /// Swallow inbound sink errors that mention a port
    #[serde(default = "default_true")]
    pub tolerate_port_conflicts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_length: default_secret_length(),
            tolerate_port_conflicts: true,
        }
    }
}

impl Config {
    /// Parse a YAML document; missing fields take their defaults
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

fn default_secret_length() -> usize {
    crate::domain::defaults::DEFAULT_SECRET_LENGTH
}

fn default_true() -> bool {
    true
}
