//! Contract error types for the panel settings service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// One failed write inside a multi-key update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceFailure {
    /// External key that could not be written
    pub key: String,
    /// Backend error message
    pub message: String,
}

/// Panel settings domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Key has neither a stored row nor a compiled-in default
    #[error("key <{key}> has no stored value and no default")]
    UnknownKey { key: String },

    /// Stored or default text does not convert to the declared field type
    #[error("setting {key}: cannot convert {value:?}: {reason}")]
    Conversion {
        key: String,
        value: String,
        reason: String,
    },

    /// Record schema declares something the record cannot hold
    #[error("schema error: {message}")]
    Configuration { message: String },

    /// Submitted record violates its own consistency rules
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Listener template is not a JSON object
    #[error("invalid template: {message}")]
    Template { message: String },

    /// Ingestion sink rejected the derived inbounds
    #[error("inbound ingestion failed: {message}")]
    Ingestion { message: String },

    /// Reading from the backend failed
    #[error("storage error: {message}")]
    Storage { message: String },

    /// One or more keys could not be written during an update
    #[error("failed to persist {}", format_failures(.failures))]
    Persistence { failures: Vec<PersistenceFailure> },
}

fn format_failures(failures: &[PersistenceFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.key, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl SettingsError {
    pub(crate) fn storage(err: anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{err:#}"),
        }
    }
}
