//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models, the record schema contract
//! and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;
pub mod schema;

pub use client::SettingsApi;
pub use error::{PersistenceFailure, SettingsError};
pub use model::{AllSetting, CallerContext, CallerIdentity, Inbound, OwnerId, Protocol, Setting};
pub use schema::{FieldKind, FieldSpec, SettingValue, SettingsRecord};
