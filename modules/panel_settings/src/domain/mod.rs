//! Domain layer - business logic and services

pub mod conversion;
pub mod defaults;
pub mod extractor;
pub mod repository;
pub mod schema;
pub mod service;
pub mod sink;
pub mod validation;

pub use defaults::{keys, DefaultRegistry};
pub use extractor::InboundExtractor;
pub use repository::SettingsRepository;
pub use service::Service;
pub use sink::{InboundSink, NoOpInboundSink};
