//! mediadeck TUI: ratatui application shell.

pub mod app;
pub mod event;
pub mod probe;
pub mod theme;
pub mod widgets;

pub use app::{App, AppState, FeedSource};

use mediadeck_core::{config::Config, diagnostics::BuildMode, feed::FeedDocument};
use std::path::PathBuf;

/// Launch options resolved by the binary's CLI.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Feed document to show. The built-in demo feed is used when absent.
    pub feed: Option<PathBuf>,
    /// Overrides the `[diagnostics] build_mode` config setting.
    pub build_mode: Option<BuildMode>,
}

/// Start the TUI.
pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config failed to load, using defaults");
        Config::defaults()
    });
    let build_mode = opts
        .build_mode
        .unwrap_or_else(|| config.diagnostics.build_mode.resolve());
    tracing::info!(%build_mode, feed = ?opts.feed, "starting");

    let feed = match opts.feed {
        Some(path) => FeedSource {
            label: format!("file://{}", path.display()),
            document: FeedDocument::from_path(&path),
        },
        None => demo_feed(),
    };

    // Media probes run here; the render loop itself stays on this thread.
    let runtime = tokio::runtime::Runtime::new()?;
    let state = AppState::new(feed, config, theme::Theme::load_default(), build_mode);
    App::new(state, runtime.handle().clone()).run()
}

// ---------------------------------------------------------------------------
// Demo feed, shown when no --feed is given
// ---------------------------------------------------------------------------

pub fn demo_feed() -> FeedSource {
    use chrono::{Duration, Utc};
    use serde_json::json;

    let now = Utc::now();
    let ago = |d: Duration| (now - d).to_rfc3339();

    let document = json!({
        "items": [
            {
                "_id": "665f1c2e9a",
                "type": "image",
                "mediaUrl": "https://cdn.example.com/photos/harbour-dawn.jpg",
                "title": "Harbour at dawn",
                "description": "Long exposure from the north pier.",
                "tags": ["photography", "sea", "morning", "longexposure", "pier"],
                "views": 1284,
                "likesCount": 97,
                "commentsCount": 12,
                "createdAt": ago(Duration::hours(3))
            },
            {
                "_id": "665f1c2e9b",
                "type": "video",
                "mediaUrl": "/var/lib/mediadeck/clips/timelapse.mp4",
                "title": "City timelapse",
                "duration": 125,
                "tags": ["city", "timelapse"],
                "views": 5310,
                "likesCount": 402,
                "commentsCount": 38,
                "createdAt": ago(Duration::days(2))
            },
            {
                "_id": "665f1c2e9c",
                "type": "audio",
                "thumbnailUrl": "/var/lib/mediadeck/covers/field-notes.jpg",
                "title": "Field notes #14",
                "description": "Rain on the greenhouse roof.",
                "duration": 3600,
                "views": 211,
                "likesCount": 18,
                "createdAt": ago(Duration::minutes(20))
            },
            {
                "_id": "665f1c2e9d",
                "type": "audio",
                "title": "Voice memo",
                "duration": 59,
                "tags": ["draft"]
            },
            {
                "_id": "665f1c2e9e",
                "type": "document",
                "title": "Unsupported attachment",
                "views": 3
            }
        ],
        "legacy": [
            {
                "id": 1042,
                "type": "image",
                "thumbnailUrl": "https://archive.example.com/thumbs/1042.jpg",
                "mediaUrl": "https://archive.example.com/1042.jpg",
                "title": "Old gallery upload",
                "tags": ["archive"],
                "views": 88,
                "createdAt": ago(Duration::days(800))
            }
        ]
    });

    FeedSource {
        label: "builtin://demo-feed".to_string(),
        document: FeedDocument::from_value(document),
    }
}
