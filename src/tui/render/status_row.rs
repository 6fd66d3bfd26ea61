use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status row (bottom of screen): key hints for the current
/// state, unless the config turns them off.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if app.config.ui.show_key_hints {
        let hint = if app.calendar.is_some() {
            "Enter pick   Esc close   [ ] month"
        } else {
            "\u{2190}/\u{2192} day   j/k tasks   t today   c calendar   q quit"
        };
        let mut spans = vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
        ];
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
        Line::from(spans)
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
