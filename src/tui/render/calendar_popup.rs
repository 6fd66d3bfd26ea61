use chrono::{Datelike, NaiveDate, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::cal;
use crate::ops::day_marks::day_marks;
use crate::tui::app::App;

/// Columns per day cell: a 2-digit day number, a space, and three
/// indicator slots (overdue, completed, pending, in that order).
const CELL_W: u16 = 6;
const CELL_GAP: u16 = 1;
const GRID_W: u16 = 7 * CELL_W + 6 * CELL_GAP;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Render the month calendar popup overlay and record its hit regions
/// (surface, nav zones, day cells) for the mouse handler.
pub fn render_calendar_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(cal_state) = app.calendar.as_mut() else {
        return;
    };

    let theme = &app.theme;
    let bg = theme.background;
    let now = Utc::now();
    let today = now.date_naive();

    let month = cal_state.month();
    let days = cal::days_of_month(month);
    let start_dow = month.weekday().num_days_from_sunday() as usize;
    let week_count = (start_dow + days.len()).div_ceil(7);

    let inner_w = GRID_W as usize;

    // Sizing: grid plus borders, centered; rows are nav, weekday header,
    // the weeks, a blank line, and the hint bar.
    let popup_w = (GRID_W + 2).min(area.width);
    let inner_h = week_count as u16 + 4;
    let popup_h = (inner_h + 2).min(area.height.saturating_sub(2).max(3));
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    // Month navigation line: click zones at both ends.
    let title = month.format("%B %Y").to_string();
    let nav_style = Style::default().fg(theme.highlight).bg(bg);
    let nav_line = Line::from(vec![
        Span::styled(" \u{2039} ", nav_style),
        Span::styled(
            format!("{:^width$}", title, width = inner_w - 6),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{203A} ", nav_style),
    ]);

    let header: String = WEEKDAYS
        .iter()
        .map(|wd| format!("{:<width$}", wd, width = CELL_W as usize))
        .collect::<Vec<_>>()
        .join(" ");
    let header_line = Line::from(Span::styled(
        header,
        Style::default().fg(theme.dim).bg(bg),
    ));

    // Week rows, recording one hit rectangle per visible day cell.
    let grid_x = popup_area.x + 1;
    let grid_y = popup_area.y + 3; // top border, nav line, weekday header
    let bottom_border = popup_area.y + popup_h.saturating_sub(1);
    let mut day_areas: Vec<(NaiveDate, Rect)> = Vec::new();
    let mut week_lines: Vec<Line> = Vec::new();
    let mut day_iter = days.iter().copied();

    for week in 0..week_count {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..7usize {
            if col > 0 {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            let date = if week == 0 && col < start_dow {
                None
            } else {
                day_iter.next()
            };
            let Some(date) = date else {
                spans.push(Span::styled(
                    " ".repeat(CELL_W as usize),
                    Style::default().bg(bg),
                ));
                continue;
            };

            let marks = day_marks(&app.tasks, date, now);
            let is_selected = date == app.selected_date;
            let is_today = date == today;
            let is_cursor = date == cal_state.cursor;

            let mut num_style = if is_selected {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if is_today {
                Style::default().fg(theme.today).bg(bg)
            } else {
                Style::default().fg(theme.text).bg(bg)
            };
            if is_cursor {
                num_style = num_style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{:>2}", date.day()), num_style));
            spans.push(Span::styled(" ", Style::default().bg(bg)));

            for (on, color) in [
                (marks.overdue, theme.red),
                (marks.completed, theme.green),
                (marks.pending, theme.blue),
            ] {
                if on {
                    spans.push(Span::styled(
                        "\u{25CF}",
                        Style::default().fg(color).bg(bg),
                    ));
                } else {
                    spans.push(Span::styled(" ", Style::default().bg(bg)));
                }
            }

            let cell_y = grid_y + week as u16;
            if cell_y < bottom_border {
                let cell_x = grid_x + col as u16 * (CELL_W + CELL_GAP);
                day_areas.push((date, Rect::new(cell_x, cell_y, CELL_W, 1)));
            }
        }
        week_lines.push(Line::from(spans));
    }

    let blank_line = Line::from(Span::styled(
        " ".repeat(inner_w),
        Style::default().bg(bg),
    ));

    let hint = "\u{2039}\u{203A} month   \u{2190}\u{2191}\u{2193}\u{2192} move   Enter pick   Esc close";
    let hint_len = hint.chars().count();
    let hint_pad = inner_w.saturating_sub(hint_len);
    let left_pad = hint_pad / 2;
    let hint_line = Line::from(vec![
        Span::styled(" ".repeat(left_pad), Style::default().bg(bg)),
        Span::styled(hint, Style::default().fg(theme.dim).bg(bg)),
        Span::styled(
            " ".repeat(hint_pad - left_pad),
            Style::default().bg(bg),
        ),
    ]);

    let mut lines = vec![nav_line, header_line];
    lines.extend(week_lines);
    lines.push(blank_line);
    lines.push(hint_line);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        popup_area,
    );

    // Hit regions for the mouse handler.
    cal_state.area = popup_area;
    cal_state.prev_area = Rect::new(popup_area.x + 1, popup_area.y + 1, 3, 1);
    cal_state.next_area = Rect::new(
        popup_area.x + 1 + GRID_W.saturating_sub(3),
        popup_area.y + 1,
        3,
        1,
    );
    cal_state.day_areas = day_areas;
}
