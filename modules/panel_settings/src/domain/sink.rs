//! Ingestion sink for inbounds derived from the xray template

use crate::contract::Inbound;

/// Accepts and stores derived inbounds
///
/// The sink may reject part of a batch (e.g. a port already taken); it
/// reports that through the error text.
#[async_trait::async_trait]
pub trait InboundSink: Send + Sync {
    /// Add a batch of inbounds
    ///
    /// # Arguments
    /// * `inbounds` - Fully populated inbounds, possibly empty
    async fn add_inbounds(&self, inbounds: Vec<Inbound>) -> anyhow::Result<()>;
}

/// No-op sink for testing or when inbound management is disabled
pub struct NoOpInboundSink;

#[async_trait::async_trait]
impl InboundSink for NoOpInboundSink {
    async fn add_inbounds(&self, _inbounds: Vec<Inbound>) -> anyhow::Result<()> {
        // No-op: inbounds are discarded
        Ok(())
    }
}
