//! Core types for mediadeck-core.
//!
//! This module defines the data structures shared by the card and diagnostics
//! layers: the normalised [`CanonicalContent`], its [`MediaType`]
//! discriminant, and the [`DiagnosticSession`] snapshot with its
//! [`NetworkRequest`] log.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label used by the diagnostic overlay when the caller does not name the
/// component it is inspecting.
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// A content item after normalisation.
///
/// Produced by [`normalize`](crate::normalizer::normalize) and consumed
/// uniformly by the preview and card layers, independent of which raw field
/// names originated each value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalContent {
    /// Resolved from `_id`, falling back to the legacy `id` key.
    pub id: Option<String>,
    /// Sole selector for the preview variant.
    pub media_type: MediaType,
    pub media_url: Option<String>,
    /// Resolved from `coverUrl`, falling back to the legacy `thumbnailUrl`.
    pub cover_url: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Length in seconds. Never negative.
    pub duration: Option<f64>,
    /// Source order, not deduplicated.
    pub tags: Vec<String>,
    pub views: u64,
    pub likes_count: u64,
    pub comments_count: u64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Item comes from an older/offline source: not navigable, no stats.
    pub is_legacy: bool,
}

/// Media discriminant selecting the preview variant of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    #[default]
    Unknown,
}

impl MediaType {
    /// Parse the raw `type` string. Anything unrecognised is [`MediaType::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            "audio" => MediaType::Audio,
            _ => MediaType::Unknown,
        }
    }

    /// Glyph shown in the card's type badge. `None` for unknown media.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            MediaType::Image => Some("▣"),
            MediaType::Video => Some("▶"),
            MediaType::Audio => Some("♪"),
            MediaType::Unknown => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Audio => write!(f, "audio"),
            MediaType::Unknown => write!(f, "unknown"),
        }
    }
}

/// One entry of a component's request log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub method: String,
    pub url: String,
    /// `None` when the request produced no response code.
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NetworkRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            status,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Snapshot of a component's state handed to the diagnostic overlay on each
/// render. The overlay keeps no memory of previous sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticSession {
    pub loading: bool,
    pub error: Option<Value>,
    pub data: Option<Value>,
    /// Append-only from the caller's perspective; oldest first.
    pub network_requests: Vec<NetworkRequest>,
    pub component_name: String,
    /// Extra key/value pairs shown verbatim, in insertion order.
    pub additional_info: Map<String, Value>,
}

impl Default for DiagnosticSession {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
            network_requests: Vec::new(),
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            additional_info: Map::new(),
        }
    }
}
