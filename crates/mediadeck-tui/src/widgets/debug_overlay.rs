//! Diagnostics overlay: floating panel in the bottom-right corner.
//!
//! Renders nothing unless the build mode is development and the overlay has
//! not been closed. `d` collapses/expands the body, `x` closes it until the
//! next launch.

use crate::theme::Theme;
use crate::widgets::network_log::network_lines;
use mediadeck_core::diagnostics::{format_optional, format_value, summarize_shape, BuildMode, OverlayState};
use mediadeck_core::DiagnosticSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const MAX_WIDTH: u16 = 64;
/// Formatted data beyond this many lines is elided.
const DATA_PREVIEW_LINES: usize = 8;

pub struct DebugOverlay<'a> {
    session: &'a DiagnosticSession,
    state: &'a OverlayState,
    mode: BuildMode,
    theme: &'a Theme,
}

impl<'a> DebugOverlay<'a> {
    pub fn new(
        session: &'a DiagnosticSession,
        state: &'a OverlayState,
        mode: BuildMode,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            state,
            mode,
            theme,
        }
    }
}

impl Widget for DebugOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.should_render(self.mode) {
            return;
        }

        let body = if self.state.is_expanded() {
            body_lines(self.session, self.theme)
        } else {
            Vec::new()
        };
        let rect = overlay_rect(area, framed_height(body.len()));
        Clear.render(rect, buf);

        let hint = if self.state.is_expanded() {
            " d:collapse x:close "
        } else {
            " d:expand x:close "
        };
        let block = Block::bordered()
            .title(Line::styled(
                format!(" ⚙ {} ", self.session.component_name),
                self.theme.overlay_heading,
            ))
            .title_top(Line::styled(hint, self.theme.overlay_muted).right_aligned())
            .border_style(self.theme.border_overlay);
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(body).render(inner, buf);
    }
}

/// Rows needed for `lines` body lines plus the border, saturating at `u16::MAX`.
fn framed_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

/// Bottom-right rectangle `height` rows tall (clamped to `area`).
fn overlay_rect(area: Rect, height: u16) -> Rect {
    let width = area.width.min(MAX_WIDTH);
    let height = height.min(area.height);
    Rect {
        x: area.right() - width,
        y: area.bottom() - height,
        width,
        height,
    }
}

/// Body of the expanded overlay.
pub fn body_lines(session: &DiagnosticSession, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Status  ", theme.overlay_heading),
        if session.loading {
            Span::styled("loading…", theme.status_success)
        } else {
            Span::raw("idle")
        },
    ]));

    if let Some(error) = &session.error {
        lines.push(Line::styled("Error", theme.overlay_heading));
        for text in format_optional(Some(error)).lines() {
            lines.push(Line::styled(format!("  {text}"), theme.overlay_error));
        }
    }

    lines.push(Line::from(vec![
        Span::styled("Data  ", theme.overlay_heading),
        Span::raw(summarize_shape(session.data.as_ref())),
    ]));
    if session.data.is_some() {
        let formatted = format_optional(session.data.as_ref());
        let total = formatted.lines().count();
        for text in formatted.lines().take(DATA_PREVIEW_LINES) {
            lines.push(Line::styled(format!("  {text}"), theme.overlay_muted));
        }
        if total > DATA_PREVIEW_LINES {
            lines.push(Line::styled(
                format!("  … {} more lines", total - DATA_PREVIEW_LINES),
                theme.overlay_muted,
            ));
        }
    }

    if !session.additional_info.is_empty() {
        lines.push(Line::styled("Info", theme.overlay_heading));
        for (key, value) in &session.additional_info {
            let formatted = format_value(value);
            let mut rows = formatted.lines();
            let first = rows.next().unwrap_or_default();
            lines.push(Line::from(format!("  {key}: {first}")));
            for rest in rows {
                lines.push(Line::from(format!("    {rest}")));
            }
        }
    }

    lines.extend(network_lines(&session.network_requests, theme));
    lines
}
