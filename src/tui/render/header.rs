use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app name on the left, the month-text trigger on
/// the right. Clicking the trigger region toggles the calendar popup, so
/// its screen rectangle is recorded on the app every frame.
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let name = " taskcal";
    let month_text = format!("{} \u{25BE} ", app.selected_date.format("%B %Y"));
    let name_w = name.chars().count();
    let month_w = month_text.chars().count();
    let pad = width.saturating_sub(name_w + month_w);

    let line = Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(
            month_text,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ]);
    let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row);

    app.trigger_area = Rect::new(area.x + (name_w + pad) as u16, area.y, month_w as u16, 1);

    if area.height > 1 {
        let rule = "\u{2500}".repeat(width);
        let rule_row = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                rule,
                Style::default().fg(app.theme.dim).bg(bg),
            ))),
            rule_row,
        );
    }
}
