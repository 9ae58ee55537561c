//! Panel Settings Module
//!
//! Persists panel configuration as loose key/value string rows and exposes it
//! as one strongly-typed record, reconciled against compiled-in defaults.
//! Saving the xray template also refreshes the inbounds it declares.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, AllSetting, CallerContext, Inbound, Protocol,
    Setting,
};

pub mod module;
pub use module::SettingsServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
