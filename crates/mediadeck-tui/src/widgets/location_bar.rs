//! Location bar: one-line strip at the top of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Shows the current route and, while probes are in flight, a loading marker.
/// Keybinding hints are right-aligned in the same row.
pub struct LocationBar<'a> {
    location: &'a str,
    loading: bool,
}

impl<'a> LocationBar<'a> {
    pub fn new(location: &'a str, loading: bool) -> Self {
        Self { location, loading }
    }
}

impl Widget for LocationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                " mediadeck ",
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} ", self.location)),
        ];
        if self.loading {
            spans.push(Span::styled("⟳", Style::default().add_modifier(Modifier::DIM)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
