//! Feed documents: the raw content handed over by the data-fetching layer.
//!
//! Two layouts are accepted:
//!
//! ```json
//! [ { "_id": "a1", "type": "image" } ]
//! ```
//!
//! ```json
//! { "items": [ … ], "legacy": [ … ] }
//! ```
//!
//! Entries under `legacy` come from the offline archive and are normalised
//! with `is_legacy = true`. Individual items are never validated here; the
//! normalizer accepts anything.

use crate::error::FeedError;
use crate::normalizer;
use crate::types::CanonicalContent;
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDocument {
    pub items: Vec<Value>,
    pub legacy: Vec<Value>,
}

impl FeedDocument {
    pub fn from_path(path: &Path) -> Result<Self, FeedError> {
        let src = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&src)
    }

    pub fn from_json_str(src: &str) -> Result<Self, FeedError> {
        Self::from_value(serde_json::from_str(src)?)
    }

    pub fn from_value(value: Value) -> Result<Self, FeedError> {
        match value {
            Value::Array(items) => Ok(Self {
                items,
                legacy: Vec::new(),
            }),
            Value::Object(mut map) => {
                if !map.contains_key("items") && !map.contains_key("legacy") {
                    return Err(FeedError::Shape {
                        found: "object without `items` or `legacy`",
                    });
                }
                let mut take = |key: &str| match map.remove(key) {
                    None | Some(Value::Null) => Ok(Vec::new()),
                    Some(Value::Array(list)) => Ok(list),
                    Some(other) => Err(FeedError::Shape {
                        found: json_type(&other),
                    }),
                };
                Ok(Self {
                    items: take("items")?,
                    legacy: take("legacy")?,
                })
            }
            other => Err(FeedError::Shape {
                found: json_type(&other),
            }),
        }
    }

    /// Normalise every entry, current items first.
    pub fn contents(&self) -> Vec<CanonicalContent> {
        let mut out = normalizer::normalize_all(&self.items, false);
        out.extend(normalizer::normalize_all(&self.legacy, true));
        out
    }

    pub fn len(&self) -> usize {
        self.items.len() + self.legacy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw document, as shown in the diagnostics `data` section.
    pub fn to_value(&self) -> Value {
        json!({ "items": self.items, "legacy": self.legacy })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
