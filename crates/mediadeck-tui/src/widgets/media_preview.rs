//! Media preview widget: the tinted surface at the top of each card.
//!
//! Draws the [`Preview`] variant chosen by the core dispatcher. The widget
//! never decides which variant to show.

use crate::theme::Theme;
use mediadeck_core::preview::{AudioSurface, Preview, Visual};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const PLACEHOLDER_TEXT: &str = "media unavailable";
const PLAY_AFFORDANCE: &str = " ▶ play ";

pub struct MediaPreview<'a> {
    preview: &'a Preview,
    theme: &'a Theme,
}

impl<'a> MediaPreview<'a> {
    pub fn new(preview: &'a Preview, theme: &'a Theme) -> Self {
        Self { preview, theme }
    }
}

impl Widget for MediaPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.theme.preview_surface);

        let lines = match self.preview {
            Preview::Image(visual) => visual_lines("image", visual, self.theme),
            Preview::Video { visual, muted, .. } => {
                let mut lines = visual_lines("video", visual, self.theme);
                if *muted && matches!(visual, Visual::Media(_)) {
                    lines[0].push_span(Span::styled(" (muted)", self.theme.preview_placeholder));
                }
                lines
            }
            Preview::Audio(surface) => audio_lines(surface, self.theme),
        };

        Paragraph::new(lines)
            .style(self.theme.preview_surface)
            .render(area, buf);

        // Play affordance sits on the right edge of the first row, over the media.
        if let Preview::Video {
            visual: Visual::Media(_),
            play_overlay: true,
            ..
        } = self.preview
        {
            let row = Rect { height: 1, ..area };
            Paragraph::new(Line::styled(PLAY_AFFORDANCE, self.theme.preview_play))
                .alignment(Alignment::Right)
                .render(row, buf);
        }
    }
}

fn visual_lines(kind: &str, visual: &Visual, theme: &Theme) -> Vec<Line<'static>> {
    match visual {
        Visual::Media(url) => vec![
            Line::from(Span::styled(format!(" {kind}"), theme.preview_media)),
            Line::from(Span::styled(format!(" {url}"), theme.preview_placeholder)),
        ],
        Visual::Placeholder => vec![
            Line::from(Span::styled(format!(" ░░ {PLACEHOLDER_TEXT}"), theme.preview_placeholder)),
            Line::default(),
        ],
        Visual::Empty => vec![Line::default(), Line::default()],
    }
}

fn audio_lines(surface: &AudioSurface, theme: &Theme) -> Vec<Line<'static>> {
    match surface {
        AudioSurface::Cover(url) => vec![
            Line::from(Span::styled(" audio cover", theme.preview_media)),
            Line::from(Span::styled(format!(" {url}"), theme.preview_placeholder)),
        ],
        AudioSurface::Bare => vec![Line::default(), Line::default()],
        AudioSurface::Glyph => vec![
            Line::from(Span::styled(" ♪ ♫ ♪", theme.preview_media)),
            Line::default(),
        ],
    }
}
