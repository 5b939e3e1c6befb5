//! Media preview dispatch.
//!
//! [`select_preview`] picks exactly one [`Preview`] variant from the
//! content's [`MediaType`]. URLs only decide what the chosen variant shows,
//! never which variant is chosen.
//!
//! Load failures arrive asynchronously from the renderer and are recorded in
//! [`MediaFailures`]. Each slot flips at most once and is never cleared, so a
//! failed element stays on its fallback for the lifetime of the card.

use crate::types::{CanonicalContent, MediaType};

// ---------------------------------------------------------------------------
// Load-failure state
// ---------------------------------------------------------------------------

/// Which media element of a card a load signal refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSlot {
    /// The image or video element showing `media_url`.
    Media,
    /// The cover image on an audio surface.
    Cover,
}

/// Per-card record of media elements that failed to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaFailures {
    media_failed: bool,
    cover_failed: bool,
}

impl MediaFailures {
    /// Record a load error for `slot`. Returns `true` only for the first
    /// failure of that slot.
    pub fn mark_failed(&mut self, slot: MediaSlot) -> bool {
        let flag = match slot {
            MediaSlot::Media => &mut self.media_failed,
            MediaSlot::Cover => &mut self.cover_failed,
        };
        !std::mem::replace(flag, true)
    }

    pub fn is_failed(&self, slot: MediaSlot) -> bool {
        match slot {
            MediaSlot::Media => self.media_failed,
            MediaSlot::Cover => self.cover_failed,
        }
    }
}

// ---------------------------------------------------------------------------
// Preview variants
// ---------------------------------------------------------------------------

/// What an image or video element shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// The media loaded (or is loading) from this URL.
    Media(String),
    /// The media failed to load; a placeholder replaces it.
    Placeholder,
    /// No media URL was supplied.
    Empty,
}

/// What the audio surface shows on top of its background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSurface {
    Cover(String),
    /// The cover failed to load; the surface stays, the image is hidden.
    Bare,
    /// No cover supplied; a generic audio glyph is shown.
    Glyph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Image(Visual),
    Video {
        visual: Visual,
        muted: bool,
        play_overlay: bool,
    },
    Audio(AudioSurface),
}

/// Select the preview for a card. `None` for unknown media types.
pub fn select_preview(content: &CanonicalContent, failures: &MediaFailures) -> Option<Preview> {
    let visual = || match (&content.media_url, failures.is_failed(MediaSlot::Media)) {
        (None, _) => Visual::Empty,
        (Some(_), true) => Visual::Placeholder,
        (Some(url), false) => Visual::Media(url.clone()),
    };

    match content.media_type {
        MediaType::Image => Some(Preview::Image(visual())),
        MediaType::Video => Some(Preview::Video {
            visual: visual(),
            muted: true,
            play_overlay: true,
        }),
        MediaType::Audio => Some(Preview::Audio(
            match (&content.cover_url, failures.is_failed(MediaSlot::Cover)) {
                (None, _) => AudioSurface::Glyph,
                (Some(_), true) => AudioSurface::Bare,
                (Some(url), false) => AudioSurface::Cover(url.clone()),
            },
        )),
        MediaType::Unknown => None,
    }
}

/// URLs whose load signal the renderer has to watch for this content's
/// active preview variant.
pub fn probe_targets(content: &CanonicalContent) -> Vec<(MediaSlot, String)> {
    let slot_url = match content.media_type {
        MediaType::Image | MediaType::Video => {
            content.media_url.clone().map(|u| (MediaSlot::Media, u))
        }
        MediaType::Audio => content.cover_url.clone().map(|u| (MediaSlot::Cover, u)),
        MediaType::Unknown => None,
    };
    slot_url.into_iter().collect()
}

/// Format a duration badge as `M:SS`. `None` when the duration is absent or
/// zero, in which case no badge is shown.
pub fn format_duration(duration: Option<f64>) -> Option<String> {
    let secs = duration.filter(|d| *d > 0.0)?.floor() as u64;
    Some(format!("{}:{:02}", secs / 60, secs % 60))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
