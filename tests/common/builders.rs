//! Test builders: ergonomic constructors for raw content items, requests
//! and diagnostic sessions.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

#![allow(dead_code)]

use mediadeck_core::{DiagnosticSession, NetworkRequest};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// RawItemBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw (pre-normalisation) content JSON.
///
/// # Example
///
/// ```rust
/// let raw = RawItemBuilder::new()
///     .id("abc")
///     .media("video", "/clips/a.mp4")
///     .duration(125.0)
///     .tags(&["a", "b"])
///     .build();
/// ```
#[derive(Default)]
pub struct RawItemBuilder {
    fields: Map<String, Value>,
}

impl RawItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Primary `_id` field.
    pub fn id(self, id: &str) -> Self {
        self.set("_id", id)
    }

    /// Legacy `id` field.
    pub fn legacy_id(self, id: &str) -> Self {
        self.set("id", id)
    }

    pub fn media(self, media_type: &str, url: &str) -> Self {
        self.set("type", media_type).set("mediaUrl", url)
    }

    pub fn media_type(self, media_type: &str) -> Self {
        self.set("type", media_type)
    }

    pub fn cover(self, url: &str) -> Self {
        self.set("coverUrl", url)
    }

    pub fn thumbnail(self, url: &str) -> Self {
        self.set("thumbnailUrl", url)
    }

    pub fn title(self, title: &str) -> Self {
        self.set("title", title)
    }

    pub fn duration(self, secs: f64) -> Self {
        self.set("duration", secs)
    }

    pub fn tags(self, tags: &[&str]) -> Self {
        self.set("tags", json!(tags))
    }

    pub fn stats(self, views: u64, likes: u64, comments: u64) -> Self {
        self.set("views", views)
            .set("likesCount", likes)
            .set("commentsCount", comments)
    }

    pub fn created_at(self, rfc3339: &str) -> Self {
        self.set("createdAt", rfc3339)
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn get(url: &str, status: u16) -> NetworkRequest {
    NetworkRequest::new("GET", url, Some(status))
}

/// `n` requests `GET /api/1` … `GET /api/n`, all successful.
pub fn request_log(n: usize) -> Vec<NetworkRequest> {
    (1..=n).map(|i| get(&format!("/api/{i}"), 200)).collect()
}

pub fn session_with(data: Option<Value>, requests: Vec<NetworkRequest>) -> DiagnosticSession {
    DiagnosticSession {
        data,
        network_requests: requests,
        component_name: "TestPanel".to_string(),
        ..Default::default()
    }
}
