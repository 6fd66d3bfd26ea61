use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::App;
use crate::tui::calendar::CalendarOutcome;

/// Keys while the calendar popup is open.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(cal) = app.calendar.as_mut() else {
        return;
    };
    let outcome = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(CalendarOutcome::Dismissed),
        KeyCode::Enter => Some(CalendarOutcome::Picked(cal.cursor)),
        KeyCode::Char('[') | KeyCode::Char('p') => {
            cal.prev_month();
            None
        }
        KeyCode::Char(']') | KeyCode::Char('n') => {
            cal.next_month();
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            cal.move_cursor(-1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            cal.move_cursor(1);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            cal.move_cursor(-7);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            cal.move_cursor(7);
            None
        }
        _ => None,
    };
    if let Some(outcome) = outcome {
        app.apply_calendar_outcome(outcome);
    }
}

/// What a pointer-down at some position should do, resolved against the
/// hit regions the renderer recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickTarget {
    PrevMonth,
    NextMonth,
    Day(NaiveDate),
    /// Inside the popup surface but not on an interactive region.
    Surface,
    /// The month-text trigger; excluded from outside-dismissal, toggles.
    Trigger,
    Outside,
}

/// Pointer-down handling while the popup is open: day cells pick, the
/// nav zones shift the month, the trigger toggles closed, anything else
/// is an outside click and dismisses.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);
    let target = {
        let Some(cal) = app.calendar.as_ref() else {
            return;
        };
        if cal.prev_area.contains(pos) {
            ClickTarget::PrevMonth
        } else if cal.next_area.contains(pos) {
            ClickTarget::NextMonth
        } else if let Some(day) = cal.day_at(pos) {
            ClickTarget::Day(day)
        } else if cal.area.contains(pos) {
            ClickTarget::Surface
        } else if app.trigger_area.contains(pos) {
            ClickTarget::Trigger
        } else {
            ClickTarget::Outside
        }
    };

    match target {
        ClickTarget::PrevMonth => {
            if let Some(cal) = app.calendar.as_mut() {
                cal.prev_month();
            }
        }
        ClickTarget::NextMonth => {
            if let Some(cal) = app.calendar.as_mut() {
                cal.next_month();
            }
        }
        ClickTarget::Day(day) => app.apply_calendar_outcome(CalendarOutcome::Picked(day)),
        ClickTarget::Surface => {}
        ClickTarget::Trigger => app.close_calendar(),
        ClickTarget::Outside => app.apply_calendar_outcome(CalendarOutcome::Dismissed),
    }
}
