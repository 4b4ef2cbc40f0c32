//! Progress bundle: exported ledger and bookmarks as one JSON document.
//!
//! ```json
//! { "version": 1, "progress": { ... }, "bookmarks": ["src|||tgt"], "exportedAt": "2024-01-01T00:00:00Z" }
//! ```

use crate::error::ImportError;
use crate::types::ProgressRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const BUNDLE_VERSION: u32 = 1;

/// Exported progress document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBundle {
    pub version: u32,
    pub progress: BTreeMap<String, ProgressRecord>,
    pub bookmarks: Vec<String>,
    pub exported_at: DateTime<Utc>,
}

impl ProgressBundle {
    pub fn new(progress: BTreeMap<String, ProgressRecord>, bookmarks: Vec<String>) -> Self {
        Self {
            version: BUNDLE_VERSION,
            progress,
            bookmarks,
            exported_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A validated bundle ready to replace the ledger and bookmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedBundle {
    pub progress: BTreeMap<String, ProgressRecord>,
    /// `None` when the bundle's `bookmarks` is not an array; the current
    /// bookmarks are then kept.
    pub bookmarks: Option<Vec<String>>,
}

/// Validate an exported document.
///
/// Rejects anything that is not an object or lacks `progress` or
/// `bookmarks`. Nothing is applied here, so a rejection never leaves a
/// partial import behind.
pub fn parse_bundle(content: &str) -> Result<ImportedBundle, ImportError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(mut object) = value else {
        return Err(ImportError::NotAnObject);
    };

    let progress = take_field(&mut object, "progress")?;
    let bookmarks = take_field(&mut object, "bookmarks")?;

    let progress = serde_json::from_value(progress).map_err(ImportError::InvalidProgress)?;
    let bookmarks = match bookmarks {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(key) => Some(key),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    };

    Ok(ImportedBundle {
        progress,
        bookmarks,
    })
}

fn take_field(
    object: &mut serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<Value, ImportError> {
    match object.remove(name) {
        None | Some(Value::Null) => Err(ImportError::MissingField(name)),
        Some(value) => Ok(value),
    }
}
