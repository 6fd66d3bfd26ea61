pub mod calendar_popup;
pub mod day_view;
pub mod header;
pub mod helpers;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | day view | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    day_view::render_day_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Calendar popup (rendered on top of everything)
    if app.calendar.is_some() {
        calendar_popup::render_calendar_popup(frame, app, frame.area());
    }
}
