//! Map backend JSON values to domain entities.
//!
//! The backend returns loosely typed JSON objects (ids as strings or numbers, nullable
//! filenames). Everything is flattened to string fields here so the domain never sees
//! `serde_json::Value`.

use crate::domain::{DomainError, Record, RecordKind, RoadmapStage};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Scalar JSON value as a string. Null and nested values yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Map one JSON object to a record. Non-object values are rejected.
pub fn value_to_record(kind: RecordKind, value: &Value) -> Result<Record, DomainError> {
    let object = value
        .as_object()
        .ok_or_else(|| DomainError::Decode(format!("expected object, got {}", value)))?;

    let mut record = Record::new(kind);
    for (key, field) in object {
        match scalar_to_string(field) {
            Some(s) => record.insert(key.as_str(), s),
            None => debug!(key = %key, "skipping non-scalar record field"),
        }
    }
    Ok(record)
}

/// Map a JSON array of objects to records, preserving order.
pub fn value_to_records(kind: RecordKind, value: &Value) -> Result<Vec<Record>, DomainError> {
    let items = value
        .as_array()
        .ok_or_else(|| DomainError::Decode("expected a JSON array of records".to_string()))?;
    items.iter().map(|v| value_to_record(kind, v)).collect()
}

/// Advice section map. Only string values count as sections.
pub fn value_to_sections(value: &Value) -> Result<HashMap<String, String>, DomainError> {
    let object = value
        .as_object()
        .ok_or_else(|| DomainError::Decode("expected a JSON object of sections".to_string()))?;
    Ok(object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect())
}

/// Roadmap stages. Entries that are not objects or lack a string title map to an
/// empty title and are discarded later by the advice service.
pub fn value_to_stages(value: &Value) -> Result<Vec<RoadmapStage>, DomainError> {
    let items = value
        .as_array()
        .ok_or_else(|| DomainError::Decode("expected a JSON array of stages".to_string()))?;
    Ok(items
        .iter()
        .map(|item| {
            let text = |key: &str| {
                item.get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            RoadmapStage::new(text("title"), text("description"))
        })
        .collect())
}
