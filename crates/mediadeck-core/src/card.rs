//! Card presentation assembly.
//!
//! [`assemble`] composes everything a content card displays into one
//! [`CardView`]: navigation, badges, preview, engagement stats, the tag strip
//! and the relative timestamp. Renderers draw a `CardView` without looking at
//! the underlying [`CanonicalContent`] again.

use crate::preview::{self, MediaFailures, Preview};
use crate::types::CanonicalContent;
use chrono::{DateTime, Utc};

/// Number of tags shown before the `+N` remainder indicator.
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Shown instead of a relative time when the item has no creation date.
pub const TIMESTAMP_PLACEHOLDER: &str = "Recently";

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Activating the card navigates to this path.
    Link(String),
    /// The path is computed but activation is intercepted.
    Inert { path: String },
}

/// Result of activating a card, consumed by the app shell's router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate(String),
    /// The activation event was swallowed; the location must not change.
    Suppressed,
}

// ---------------------------------------------------------------------------
// Card parts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementStats {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Leading tags plus a count of the ones left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStrip {
    pub shown: Vec<String>,
    /// Number of tags beyond [`MAX_VISIBLE_TAGS`], if any.
    pub remainder: Option<usize>,
}

impl TagStrip {
    /// `None` when there are no tags, so the tag block is omitted entirely.
    pub fn from_tags(tags: &[String]) -> Option<Self> {
        if tags.is_empty() {
            return None;
        }
        let shown = tags.iter().take(MAX_VISIBLE_TAGS).cloned().collect();
        let remainder = tags
            .len()
            .checked_sub(MAX_VISIBLE_TAGS)
            .filter(|n| *n > 0);
        Some(Self { shown, remainder })
    }
}

/// Fully assembled card, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub navigation: Navigation,
    pub legacy_badge: bool,
    pub type_icon: Option<&'static str>,
    pub preview: Option<Preview>,
    pub duration_badge: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// `None` for legacy content.
    pub stats: Option<EngagementStats>,
    pub tags: Option<TagStrip>,
    pub timestamp: String,
}

impl CardView {
    /// Handle a click/enter on the card.
    pub fn activate(&self) -> Activation {
        match &self.navigation {
            Navigation::Link(path) => {
                tracing::debug!(path = %path, "card: navigate");
                Activation::Navigate(path.clone())
            }
            Navigation::Inert { path } => {
                tracing::debug!(path = %path, "card: activation suppressed");
                Activation::Suppressed
            }
        }
    }

    /// Path the card points at, whether or not it is navigable.
    pub fn path(&self) -> &str {
        match &self.navigation {
            Navigation::Link(path) | Navigation::Inert { path } => path,
        }
    }
}

/// Route path for a content item.
pub fn content_path(id: Option<&str>) -> String {
    format!("/content/{}", id.unwrap_or("undefined"))
}

/// Assemble the view for one card. `now` anchors the relative timestamp.
pub fn assemble(
    content: &CanonicalContent,
    failures: &MediaFailures,
    now: DateTime<Utc>,
) -> CardView {
    let path = content_path(content.id.as_deref());
    let navigation = if content.is_legacy {
        Navigation::Inert { path }
    } else {
        Navigation::Link(path)
    };

    CardView {
        navigation,
        legacy_badge: content.is_legacy,
        type_icon: content.media_type.icon(),
        preview: preview::select_preview(content, failures),
        duration_badge: preview::format_duration(content.duration),
        title: content.title.clone(),
        description: content.description.clone(),
        stats: (!content.is_legacy).then_some(EngagementStats {
            views: content.views,
            likes: content.likes_count,
            comments: content.comments_count,
        }),
        tags: TagStrip::from_tags(&content.tags),
        timestamp: content
            .created_at
            .map(|ts| relative_time(ts, now))
            .unwrap_or_else(|| TIMESTAMP_PLACEHOLDER.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Relative time
// ---------------------------------------------------------------------------

/// Human "time ago" string, e.g. `"about 2 hours ago"` or `"in 3 days"`.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(ts).num_seconds();
    let distance = distance_words(secs.unsigned_abs());
    if secs < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn distance_words(secs: u64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    let s = secs as f64;
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    if s < 30.0 {
        "less than a minute".to_string()
    } else if s < 90.0 {
        "1 minute".to_string()
    } else if s < 44.5 * MINUTE {
        plural((s / MINUTE).round() as u64, "minute")
    } else if s < 89.5 * MINUTE {
        "about 1 hour".to_string()
    } else if s < DAY {
        format!("about {}", plural((s / HOUR).round() as u64, "hour"))
    } else if s < 42.0 * HOUR {
        "1 day".to_string()
    } else if s < MONTH {
        plural((s / DAY).round() as u64, "day")
    } else if s < 45.0 * DAY {
        "about 1 month".to_string()
    } else if s < YEAR {
        plural(((s / MONTH).round() as u64).max(2), "month")
    } else {
        let years = (s / YEAR).floor() as u64;
        let months_over = ((s - years as f64 * YEAR) / MONTH).floor() as u64;
        match months_over {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
