//! Derives inbounds from the `inbounds` array of the xray template
//!
//! Decoding is permissive: every element is first read into [`InboundFields`],
//! where a missing or wrong-typed source field is simply `None`, and the
//! defaulting rules are applied in one place when the [`Inbound`] is built.

use super::sink::InboundSink;
use crate::contract::{CallerIdentity, Inbound, OwnerId, Protocol, SettingsError};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Optional-field view of one template inbound
#[derive(Debug, Default, Clone, PartialEq)]
struct InboundFields {
    up: Option<i64>,
    down: Option<i64>,
    total: Option<i64>,
    remark: Option<String>,
    enable: Option<bool>,
    expiry_time: Option<i64>,
    listen: Option<String>,
    port: Option<i64>,
    protocol: Option<String>,
    settings: Option<String>,
    stream_settings: Option<String>,
    tag: Option<String>,
    sniffing: Option<String>,
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        // fractional values truncate toward zero
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)?.as_str().map(str::to_owned)
}

fn flag(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    obj.get(key)?.as_bool()
}

/// Compact JSON of a sub-document; absent and `null` both yield `None`
fn document(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .filter(|v| !v.is_null())
        .map(|v| collapse_integral_floats(v.clone()).to_string())
}

/// Rewrite floats without a fraction (`1.0`, `1e3`) as integers
///
/// xray rejects `1000.0` where it expects an integer.
fn collapse_integral_floats(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Value::Number((f as i64).into())
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(collapse_integral_floats).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, collapse_integral_floats(v)))
                .collect(),
        ),
        other => other,
    }
}

impl InboundFields {
    fn decode(obj: &Map<String, Value>) -> Self {
        Self {
            up: number(obj, "up"),
            down: number(obj, "down"),
            total: number(obj, "total"),
            remark: text(obj, "remark"),
            enable: flag(obj, "enable"),
            expiry_time: number(obj, "expiryTime"),
            listen: text(obj, "listen"),
            port: number(obj, "port"),
            protocol: text(obj, "protocol"),
            settings: document(obj, "settings"),
            stream_settings: document(obj, "streamSettings"),
            tag: text(obj, "tag"),
            sniffing: document(obj, "sniffing"),
        }
    }

    /// `None` when one of the mandatory sub-documents is missing
    fn into_inbound(self, owner: OwnerId) -> Option<Inbound> {
        let tag = self.tag.unwrap_or_default();
        let port = self.port.unwrap_or_default();
        let remark = synthesize_remark(self.remark.unwrap_or_default(), &tag, port);

        Some(Inbound {
            user_id: owner,
            up: self.up.unwrap_or_default(),
            down: self.down.unwrap_or_default(),
            total: self.total.unwrap_or_default(),
            remark,
            enable: self.enable.unwrap_or_default(),
            expiry_time: self.expiry_time.unwrap_or_default(),
            listen: self.listen.unwrap_or_default(),
            port,
            protocol: Protocol::from(self.protocol.unwrap_or_default().as_str()),
            settings: self.settings?,
            stream_settings: self.stream_settings?,
            tag,
            sniffing: self.sniffing?,
        })
    }
}

/// Blank remarks fall back to the tag; port 0 marks a fallback inbound
pub fn synthesize_remark(remark: String, tag: &str, port: i64) -> String {
    if !remark.trim().is_empty() {
        remark
    } else if port == 0 {
        format!("{tag}-fallback").to_lowercase()
    } else {
        tag.to_lowercase()
    }
}

/// Parse `template` and build its inbounds
///
/// Returns `Ok(None)` when the template is `null` or has no `inbounds`
/// array; elements that are not objects or lack a mandatory sub-document
/// are skipped.
pub fn extract_inbounds(
    owner: OwnerId,
    template: &str,
) -> Result<Option<Vec<Inbound>>, SettingsError> {
    let config: Option<Map<String, Value>> =
        serde_json::from_str(template).map_err(|e| SettingsError::Template {
            message: e.to_string(),
        })?;
    let Some(config) = config else {
        return Ok(None);
    };

    let Some(Value::Array(elements)) = config.get("inbounds") else {
        return Ok(None);
    };

    let inbounds = elements
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|obj| InboundFields::decode(obj).into_inbound(owner))
        .collect();

    Ok(Some(inbounds))
}

/// Whether a sink error reads like a port collision
///
/// Matches on the message text, so a sink that words its errors differently
/// (or in another language) will have its rejections propagated.
pub fn is_port_conflict(err: &anyhow::Error) -> bool {
    format!("{err:#}").to_lowercase().contains("port")
}

/// Routes template inbounds into the ingestion sink
#[derive(Clone)]
pub struct InboundExtractor {
    sink: Arc<dyn InboundSink>,
    tolerate_port_conflicts: bool,
}

impl InboundExtractor {
    pub fn new(sink: Arc<dyn InboundSink>, tolerate_port_conflicts: bool) -> Self {
        Self {
            sink,
            tolerate_port_conflicts,
        }
    }

    /// Extract inbounds from `template` and hand them to the sink in one batch
    ///
    /// Returns how many inbounds were submitted.
    pub async fn apply(
        &self,
        caller: &dyn CallerIdentity,
        template: &str,
    ) -> Result<usize, SettingsError> {
        let Some(inbounds) = extract_inbounds(caller.owner_id(), template)? else {
            tracing::debug!("template has no inbounds array, nothing to ingest");
            return Ok(0);
        };

        let count = inbounds.len();
        tracing::debug!(count, "submitting template inbounds");

        if let Err(err) = self.sink.add_inbounds(inbounds).await {
            if self.tolerate_port_conflicts && is_port_conflict(&err) {
                tracing::warn!(error = %format!("{err:#}"), "inbound sink rejected some inbounds");
            } else {
                return Err(SettingsError::Ingestion {
                    message: format!("{err:#}"),
                });
            }
        }

        Ok(count)
    }
}
