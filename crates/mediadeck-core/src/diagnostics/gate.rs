//! Visibility gate for the diagnostics overlay.
//!
//! The overlay renders only when the injected [`BuildMode`] is development
//! and the local [`OverlayState`] is visible. Hiding is terminal for the
//! lifetime of the state value; a fresh `OverlayState` is the only way back.

use serde::Deserialize;

/// Build flavour the overlay is composed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode of the running binary: debug builds are development builds.
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

/// Show/expand toggles owned by one overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
    expanded: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayState {
    /// Freshly mounted overlay: visible and expanded.
    pub fn new() -> Self {
        Self {
            visible: true,
            expanded: true,
        }
    }

    pub fn should_render(&self, mode: BuildMode) -> bool {
        mode.is_development() && self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Collapse or expand the body. Leaves visibility alone.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "overlay: toggled body");
    }

    /// Close the overlay until the next mount.
    pub fn hide(&mut self) {
        if self.visible {
            tracing::debug!("overlay: hidden");
        }
        self.visible = false;
    }
}
