//! Content card widget: one bordered card in the deck.
//!
//! ```text
//! ┌▶ Title ──────────────── LEGACY  2:05 ┐
//! │ video                         ▶ play │   preview (2 rows, absent for unknown media)
//! │ /media/clip.mp4                      │
//! │ description                          │
//! │ 120 views · 8 likes · 2 comments     │   hidden for legacy items
//! │ #rust #tui #demo +2                  │   hidden when there are no tags
//! │ about 2 hours ago                    │
//! └──────────────────────────────────────┘
//! ```

use crate::theme::Theme;
use crate::widgets::media_preview::MediaPreview;
use mediadeck_core::card::{CardView, EngagementStats, TagStrip};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub const LEGACY_BADGE: &str = " LEGACY ";
const PREVIEW_ROWS: u16 = 2;

pub struct ContentCard<'a> {
    view: &'a CardView,
    selected: bool,
    show_description: bool,
    theme: &'a Theme,
}

impl<'a> ContentCard<'a> {
    pub fn new(view: &'a CardView, selected: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            selected,
            show_description: true,
            theme,
        }
    }

    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(icon) = self.view.type_icon {
            spans.push(Span::styled(format!("{icon} "), self.theme.badge_media_type));
        }
        spans.push(Span::styled(self.view.title.clone(), self.theme.card_title));
        Line::from(spans)
    }

    fn badge_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if self.view.legacy_badge {
            spans.push(Span::styled(LEGACY_BADGE, self.theme.badge_legacy));
        }
        if let Some(duration) = &self.view.duration_badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {duration} "), self.theme.badge_duration));
        }
        Line::from(spans).right_aligned()
    }
}

impl Widget for ContentCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title(self.title_line())
            .title_top(self.badge_line())
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let view = self.view;
        let description = view.description.as_deref().filter(|_| self.show_description);
        let row = |present: bool, rows: u16| Constraint::Length(if present { rows } else { 0 });

        let [preview_area, desc_area, stats_area, tags_area, footer_area] = Layout::vertical([
            row(view.preview.is_some(), PREVIEW_ROWS),
            row(description.is_some(), 1),
            row(view.stats.is_some(), 1),
            row(view.tags.is_some(), 1),
            Constraint::Length(1),
        ])
        .areas(inner);

        if let Some(preview) = &view.preview {
            MediaPreview::new(preview, self.theme).render(preview_area, buf);
        }
        if let Some(text) = description {
            Paragraph::new(Span::styled(text.to_string(), self.theme.card_description))
                .render(desc_area, buf);
        }
        if let Some(stats) = &view.stats {
            Paragraph::new(Span::styled(stats_text(stats), self.theme.card_stats))
                .render(stats_area, buf);
        }
        if let Some(tags) = &view.tags {
            Paragraph::new(Span::styled(tags_text(tags), self.theme.card_tag))
                .render(tags_area, buf);
        }
        Paragraph::new(Span::styled(view.timestamp.clone(), self.theme.card_timestamp))
            .render(footer_area, buf);
    }
}

pub fn stats_text(stats: &EngagementStats) -> String {
    format!(
        "{} views · {} likes · {} comments",
        stats.views, stats.likes, stats.comments
    )
}

pub fn tags_text(tags: &TagStrip) -> String {
    let mut out = tags
        .shown
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(more) = tags.remainder {
        out.push_str(&format!(" +{more}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_text_with_remainder() {
        let strip = TagStrip {
            shown: vec!["a".into(), "b".into(), "c".into()],
            remainder: Some(4),
        };
        assert_eq!(tags_text(&strip), "#a #b #c +4");
    }

    #[test]
    fn tags_text_without_remainder() {
        let strip = TagStrip {
            shown: vec!["solo".into()],
            remainder: None,
        };
        assert_eq!(tags_text(&strip), "#solo");
    }

    #[test]
    fn stats_text_lists_all_counts() {
        let stats = EngagementStats { views: 120, likes: 8, comments: 2 };
        assert_eq!(stats_text(&stats), "120 views · 8 likes · 2 comments");
    }
}
