//! Common test utilities: in-memory repository, recording sink, fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use panel_settings::contract::{Inbound, Setting};
use panel_settings::domain::{
    DefaultRegistry, InboundExtractor, InboundSink, Service, SettingsRepository,
};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

pub const TEST_SECRET: &str = "0123456789abcdefghijABCDEFGHIJkl";

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Settings repository backed by an ordered in-memory table
#[derive(Clone, Default)]
pub struct MockSettingsRepo {
    rows: Arc<RwLock<Vec<Setting>>>,
    failing_keys: Arc<RwLock<HashSet<String>>>,
    writes: Arc<RwLock<Vec<String>>>,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a row without going through the service
    pub fn seed(&self, key: &str, value: &str) {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|s| s.key == key) {
            Some(row) => row.value = value.to_string(),
            None => rows.push(Setting::new(key, value)),
        }
    }

    /// Make every upsert of `key` fail
    pub fn fail_on(&self, key: &str) {
        self.failing_keys.write().insert(key.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.rows
            .read()
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.clone())
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    /// Keys in the order they were written
    pub fn writes(&self) -> Vec<String> {
        self.writes.read().clone()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Setting>> {
        Ok(self.rows.read().clone())
    }

    async fn find_by_key(&self, key: &str) -> anyhow::Result<Option<Setting>> {
        Ok(self.rows.read().iter().find(|s| s.key == key).cloned())
    }

    async fn upsert(&self, key: &str, value: &str) -> anyhow::Result<Setting> {
        if self.failing_keys.read().contains(key) {
            anyhow::bail!("disk I/O error while writing {key}");
        }
        self.writes.write().push(key.to_string());
        self.seed(key, value);
        Ok(Setting::new(key, value))
    }

    async fn delete_all(&self) -> anyhow::Result<()> {
        self.rows.write().clear();
        Ok(())
    }
}

/// Sink that records every batch and optionally fails with a fixed message
#[derive(Clone, Default)]
pub struct RecordingSink {
    batches: Arc<RwLock<Vec<Vec<Inbound>>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(message: &str) -> Self {
        let sink = Self::default();
        *sink.failure.write() = Some(message.to_string());
        sink
    }

    pub fn batches(&self) -> Vec<Vec<Inbound>> {
        self.batches.read().clone()
    }
}

#[async_trait]
impl InboundSink for RecordingSink {
    async fn add_inbounds(&self, inbounds: Vec<Inbound>) -> anyhow::Result<()> {
        self.batches.write().push(inbounds);
        match self.failure.read().clone() {
            Some(message) => Err(anyhow::anyhow!(message)),
            None => Ok(()),
        }
    }
}

pub fn create_test_service_with(
    repo: Arc<MockSettingsRepo>,
    sink: Arc<RecordingSink>,
) -> Service {
    Service::new(
        repo,
        DefaultRegistry::with_secret(TEST_SECRET),
        InboundExtractor::new(sink, true),
    )
}

pub fn create_test_service() -> (Service, Arc<MockSettingsRepo>, Arc<RecordingSink>) {
    let repo = Arc::new(MockSettingsRepo::new());
    let sink = Arc::new(RecordingSink::new());
    let service = create_test_service_with(repo.clone(), sink.clone());
    (service, repo, sink)
}
