//! Colour theme for the mediadeck TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] at startup and pass the result through
//! the application as a shared reference.

use config::{Config, File, FileFormat};
use mediadeck_core::diagnostics::StatusClass;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
    overlay: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBadges {
    legacy: RawStyle,
    duration: RawStyle,
    media_type: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    title: RawStyle,
    description: RawStyle,
    stats: RawStyle,
    tag: RawStyle,
    timestamp: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPreview {
    surface: RawStyle,
    media: RawStyle,
    placeholder: RawStyle,
    play: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    success: RawStyle,
    failure: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawOverlay {
    heading: RawStyle,
    error: RawStyle,
    muted: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    badges: RawBadges,
    card: RawCard,
    preview: RawPreview,
    status: RawStatus,
    overlay: RawOverlay,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values, resolved once at load.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    pub border_overlay: Style,

    pub badge_legacy: Style,
    pub badge_duration: Style,
    pub badge_media_type: Style,

    pub card_title: Style,
    pub card_description: Style,
    pub card_stats: Style,
    pub card_tag: Style,
    pub card_timestamp: Style,

    /// Background of every preview surface.
    pub preview_surface: Style,
    pub preview_media: Style,
    pub preview_placeholder: Style,
    /// Play affordance drawn over video previews.
    pub preview_play: Style,

    pub status_success: Style,
    pub status_failure: Style,

    pub overlay_heading: Style,
    pub overlay_error: Style,
    pub overlay_muted: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            border_overlay: raw.borders.overlay.into_style(),
            badge_legacy: raw.badges.legacy.into_style(),
            badge_duration: raw.badges.duration.into_style(),
            badge_media_type: raw.badges.media_type.into_style(),
            card_title: raw.card.title.into_style(),
            card_description: raw.card.description.into_style(),
            card_stats: raw.card.stats.into_style(),
            card_tag: raw.card.tag.into_style(),
            card_timestamp: raw.card.timestamp.into_style(),
            preview_surface: raw.preview.surface.into_style(),
            preview_media: raw.preview.media.into_style(),
            preview_placeholder: raw.preview.placeholder.into_style(),
            preview_play: raw.preview.play.into_style(),
            status_success: raw.status.success.into_style(),
            status_failure: raw.status.failure.into_style(),
            overlay_heading: raw.overlay.heading.into_style(),
            overlay_error: raw.overlay.error.into_style(),
            overlay_muted: raw.overlay.muted.into_style(),
        })
    }

    pub fn status_style(&self, class: StatusClass) -> Style {
        match class {
            StatusClass::Success => self.status_success,
            StatusClass::Failure => self.status_failure,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        assert_ne!(theme.badge_legacy, Style::default());
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.preview_surface, Style::default());
    }

    #[test]
    fn status_styles_differ() {
        let theme = Theme::load_default();
        assert_ne!(
            theme.status_style(StatusClass::Success),
            theme.status_style(StatusClass::Failure)
        );
    }

    #[test]
    fn missing_section_is_an_error() {
        assert!(Theme::from_toml_str("[borders]\n").is_err());
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:236"), Some(Color::Indexed(236)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
