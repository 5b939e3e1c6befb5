//! Static feed fixtures used across harnesses.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

/// Anchor for every relative timestamp in the harnesses.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Current-generation items, one per media type plus an unknown type.
pub const FEED_CURRENT: &str = r#"[
    {"_id": "img-1", "type": "image", "mediaUrl": "https://cdn.example.com/a.jpg",
     "title": "Harbour", "tags": ["sea", "dawn", "pier", "boats", "fog"],
     "views": 1200, "likesCount": 90, "commentsCount": 4,
     "createdAt": "2024-06-01T09:00:00Z"},
    {"_id": "vid-1", "type": "video", "mediaUrl": "/clips/city.mp4",
     "title": "City", "duration": 125},
    {"_id": "aud-1", "type": "audio", "coverUrl": "/covers/rain.jpg",
     "thumbnailUrl": "/thumbs/rain.jpg", "title": "Rain", "duration": 3600},
    {"_id": "doc-1", "type": "pdf", "title": "Manual"}
]"#;

/// Mixed document: current items plus an offline legacy archive.
pub const FEED_MIXED: &str = r#"{
    "items": [
        {"_id": "new-1", "type": "image", "mediaUrl": "/m/new-1.png", "title": "Fresh"}
    ],
    "legacy": [
        {"id": "old-1", "type": "image", "thumbnailUrl": "/t/old-1.png",
         "title": "Archived", "views": 999, "likesCount": 5}
    ]
}"#;

/// Raw items whose fields have the wrong JSON types everywhere.
pub const FEED_MALFORMED: &str = r#"[
    null,
    42,
    "just a string",
    {"_id": {}, "type": 7, "tags": {"a": 1}, "views": "many", "duration": "long",
     "createdAt": "yesterday", "coverUrl": 3, "title": ["t"]}
]"#;
