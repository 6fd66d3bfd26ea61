use chrono::{Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys in the day view (no popup open).
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') | KeyCode::Enter => app.open_calendar(),
        KeyCode::Left | KeyCode::Char('h') => shift_selected(app, -1),
        KeyCode::Right | KeyCode::Char('l') => shift_selected(app, 1),
        KeyCode::Char('t') => {
            app.selected_date = Utc::now().date_naive();
            app.list_cursor = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => move_list_cursor(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_list_cursor(app, -1),
        _ => {}
    }
}

fn shift_selected(app: &mut App, days: i64) {
    if let Some(d) = app.selected_date.checked_add_signed(Duration::days(days)) {
        app.selected_date = d;
        app.list_cursor = 0;
    }
}

fn move_list_cursor(app: &mut App, direction: i64) {
    let len = app.day_tasks().len();
    if len == 0 {
        return;
    }
    if direction > 0 {
        if app.list_cursor + 1 < len {
            app.list_cursor += 1;
        }
    } else if app.list_cursor > 0 {
        app.list_cursor -= 1;
    }
}
