use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::day_marks::is_overdue;
use crate::tui::app::App;

use super::helpers::{pad_to_width, truncate_to_width};

/// Render the task list for the selected date.
pub fn render_day_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let now = Utc::now();
    let tasks = app.day_tasks();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("  {}", app.selected_date.format("%A, %B %-d")),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        " ".repeat(width),
        Style::default().bg(bg),
    )));

    if tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no tasks due)",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        for (i, task) in tasks.iter().enumerate() {
            let selected = i == app.list_cursor;
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let row_pad = Style::default().bg(row_bg);

            let mut spans: Vec<Span> = Vec::new();
            spans.push(Span::styled("  ", row_pad));

            let cb_style = Style::default()
                .fg(app.theme.status_color(task.status.as_ref()))
                .bg(row_bg);
            spans.push(Span::styled(format!("[{}] ", task.checkbox_char()), cb_style));

            // Room for the overdue tag on the right.
            let overdue = is_overdue(task, now);
            let tag = "  overdue";
            let title_max = width
                .saturating_sub(6)
                .saturating_sub(if overdue { tag.len() } else { 0 });
            let title = truncate_to_width(&task.title, title_max);
            let title_style = if task.is_completed() {
                Style::default().fg(app.theme.dim).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            };
            spans.push(Span::styled(title, title_style));

            if overdue {
                spans.push(Span::styled(
                    tag,
                    Style::default().fg(app.theme.red).bg(row_bg),
                ));
            }

            pad_to_width(&mut spans, width, row_pad);
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{Config, Task, TaskStatus};
    use crate::tui::app::App;
    use crate::tui::render::test_helpers::render_to_string;

    #[test]
    fn test_day_view_lists_due_tasks() {
        let tasks = vec![
            Task::new("Write the launch notes", "2024-03-17", Some(TaskStatus::InProgress)),
            Task::new("Elsewhere", "2024-03-20", None),
        ];
        let app = App::new(
            Config::default(),
            tasks,
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        );
        let text = render_to_string(80, 24, |frame, area| {
            super::render_day_view(frame, &app, area);
        });
        assert!(text.contains("Sunday, March 17"), "{}", text);
        assert!(text.contains("[>] Write the launch notes"), "{}", text);
        assert!(!text.contains("Elsewhere"), "{}", text);
    }

    #[test]
    fn test_day_view_empty_state() {
        let app = App::new(
            Config::default(),
            vec![],
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        );
        let text = render_to_string(80, 24, |frame, area| {
            super::render_day_view(frame, &app, area);
        });
        assert!(text.contains("(no tasks due)"), "{}", text);
    }

    #[test]
    fn test_day_view_marks_overdue() {
        let tasks = vec![Task::new("Ancient errand", "2001-01-01", None)];
        let app = App::new(
            Config::default(),
            tasks,
            NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
        );
        let text = render_to_string(80, 24, |frame, area| {
            super::render_day_view(frame, &app, area);
        });
        assert!(text.contains("Ancient errand  overdue"), "{}", text);
    }
}
