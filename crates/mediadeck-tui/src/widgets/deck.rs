//! Card deck widget: the scrollable column of content cards.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select the previous card |
//! | `↓` / `j` | Select the next card |
//! | `Enter` | Activate the selected card |
//!
//! # Scroll semantics
//!
//! `first` = index of the topmost visible card. The selection is always kept
//! within the visible window; moving it past the edge scrolls.

use std::cell::Cell;

use crate::event::Direction;
use crate::theme::Theme;
use crate::widgets::content_card::ContentCard;
use mediadeck_core::card::CardView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct DeckState {
    /// Index of the highlighted card.
    pub selected: usize,
    /// Index of the topmost visible card.
    pub first: usize,
    /// Cached from the last render so `select()` can scroll.
    last_capacity: Cell<usize>,
}

impl Default for DeckState {
    fn default() -> Self {
        Self {
            selected: 0,
            first: 0,
            last_capacity: Cell::new(3),
        }
    }
}

impl DeckState {
    fn capacity(&self) -> usize {
        self.last_capacity.get().max(1)
    }

    /// Move the selection within `total` cards, scrolling as needed.
    pub fn select(&mut self, dir: Direction, total: usize) {
        if total == 0 {
            return;
        }
        match dir {
            Direction::Up => self.selected = self.selected.saturating_sub(1),
            Direction::Down => {
                if self.selected + 1 < total {
                    self.selected += 1;
                }
            }
        }
        if self.selected < self.first {
            self.first = self.selected;
        } else if self.selected >= self.first + self.capacity() {
            self.first = self.selected + 1 - self.capacity();
        }
        tracing::debug!(selected = self.selected, first = self.first, "deck: selection moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Deck<'a> {
    state: &'a DeckState,
    views: &'a [CardView],
    card_height: u16,
    show_descriptions: bool,
    theme: &'a Theme,
}

impl<'a> Deck<'a> {
    pub fn new(
        state: &'a DeckState,
        views: &'a [CardView],
        card_height: u16,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            views,
            card_height: card_height.max(3),
            show_descriptions: true,
            theme,
        }
    }

    pub fn show_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }
}

impl Widget for Deck<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.views.is_empty() {
            Paragraph::new(Line::styled(
                " no content ",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .render(area, buf);
            return;
        }

        let capacity = (area.height / self.card_height).max(1) as usize;
        // draw always runs before handle(), so select() sees this capacity
        self.state.last_capacity.set(capacity);

        let total = self.views.len();
        let first = self.state.first.min(total.saturating_sub(1));
        let end = (first + capacity).min(total);

        // Leave one column for the scrollbar.
        let cards_area = Rect {
            width: area.width.saturating_sub(1),
            ..area
        };

        for (row, idx) in (first..end).enumerate() {
            let y = cards_area.y + row as u16 * self.card_height;
            let height = self.card_height.min(cards_area.bottom().saturating_sub(y));
            let slot = Rect {
                y,
                height,
                ..cards_area
            };
            ContentCard::new(&self.views[idx], idx == self.state.selected, self.theme)
                .show_description(self.show_descriptions)
                .render(slot, buf);
        }

        if total > capacity {
            let sb_area = Rect {
                x: area.right().saturating_sub(1),
                width: 1,
                ..area
            };
            let mut sb_state = ScrollbarState::new(total)
                .position(first)
                .viewport_content_length(capacity);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}
