//! Normalizer: resolves raw content JSON into a [`CanonicalContent`].
//!
//! Raw items come from several generations of the backend and disagree on
//! field names. Each canonical field has one fixed precedence list:
//!
//! | Field | Looked up in order |
//! |-------|--------------------|
//! | `id` | `_id`, `id` |
//! | `media_type` | `type`, `mediaType` |
//! | `cover_url` | `coverUrl`, `thumbnailUrl` |
//! | `tags` | `tags` |
//! | `views` / `likes_count` / `comments_count` | `views` / `likesCount` / `commentsCount` |
//! | `created_at` | `createdAt` (RFC 3339 string or epoch milliseconds) |
//!
//! Normalisation is total. Values of the wrong JSON type are treated as
//! absent and absent values fall back to defaults, so the render path never
//! has to branch on field presence.

use crate::types::{CanonicalContent, MediaType};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const ID_KEYS: &[&str] = &["_id", "id"];
const TYPE_KEYS: &[&str] = &["type", "mediaType"];
const COVER_KEYS: &[&str] = &["coverUrl", "thumbnailUrl"];

/// Normalise one raw item. `is_legacy` is decided by the caller (the source
/// the item was fetched from), never by the item itself.
pub fn normalize(raw: &Value, is_legacy: bool) -> CanonicalContent {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let (id, id_key) = first_of(obj, ID_KEYS, identifier);
    let (cover_url, cover_key) = first_of(obj, COVER_KEYS, text);
    let (media_type, _) = first_of(obj, TYPE_KEYS, text);

    if id_key == Some("id") || cover_key == Some("thumbnailUrl") {
        tracing::trace!(
            id = ?id,
            id_key = ?id_key,
            cover_key = ?cover_key,
            "normalizer: resolved legacy alias"
        );
    }

    CanonicalContent {
        id,
        media_type: media_type
            .as_deref()
            .map(MediaType::parse)
            .unwrap_or_default(),
        media_url: text(obj, "mediaUrl"),
        cover_url,
        title: text(obj, "title").unwrap_or_default(),
        description: text(obj, "description"),
        duration: obj
            .get("duration")
            .and_then(Value::as_f64)
            .filter(|d| d.is_finite() && *d >= 0.0),
        tags: obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        views: count(obj, "views"),
        likes_count: count(obj, "likesCount"),
        comments_count: count(obj, "commentsCount"),
        created_at: obj.get("createdAt").and_then(timestamp),
        is_legacy,
    }
}

/// Normalise a list of raw items from a single source.
pub fn normalize_all(items: &[Value], is_legacy: bool) -> Vec<CanonicalContent> {
    items.iter().map(|raw| normalize(raw, is_legacy)).collect()
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

/// Return the first key in `keys` for which `read` yields a value, together
/// with the key that matched.
fn first_of<T>(
    obj: &Map<String, Value>,
    keys: &[&'static str],
    read: impl Fn(&Map<String, Value>, &str) -> Option<T>,
) -> (Option<T>, Option<&'static str>) {
    keys.iter()
        .find_map(|key| read(obj, key).map(|v| (Some(v), Some(*key))))
        .unwrap_or((None, None))
}

/// Non-empty string value.
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Identifiers may arrive as strings or as bare numbers.
fn identifier(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        _ => text(obj, key),
    }
}

fn count(obj: &Map<String, Value>, key: &str) -> u64 {
    let Some(v) = obj.get(key) else { return 0 };
    v.as_u64()
        .or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        })
        .unwrap_or(0)
}

fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
