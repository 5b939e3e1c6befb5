//! Network section of the diagnostics overlay.

use crate::theme::Theme;
use mediadeck_core::diagnostics::NetworkLogView;
use mediadeck_core::NetworkRequest;
use ratatui::text::{Line, Span};

/// Lines for the trailing request window, newest last. Each failed request
/// with an error message gets a second, indented line.
pub fn network_lines(log: &[NetworkRequest], theme: &Theme) -> Vec<Line<'static>> {
    let view = NetworkLogView::new(log);
    if view.is_empty() {
        return vec![Line::from(vec![
            Span::styled("Network", theme.overlay_heading),
            Span::styled("  no requests", theme.overlay_muted),
        ])];
    }

    let mut lines = vec![Line::from(vec![
        Span::styled("Network", theme.overlay_heading),
        Span::styled(
            format!("  last {} of {}", view.len(), log.len()),
            theme.overlay_muted,
        ),
    ])];

    for row in view.rows() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3} ", row.status_text()),
                theme.status_style(row.status_class()),
            ),
            Span::raw(row.label()),
        ]));
        if let Some(err) = row.error() {
            lines.push(Line::from(Span::styled(
                format!("    ↳ {err}"),
                theme.overlay_error,
            )));
        }
    }
    lines
}
