mod calendar;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::App;

/// Handle a key event. The open calendar popup intercepts all keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if app.calendar.is_some() {
        calendar::handle_key(app, key);
    } else {
        navigate::handle_key(app, key);
    }
}

/// Handle a mouse event. Mouse capture is only held while the popup is
/// open, so these arrive only in the open state; anything that slips
/// through after a close is dropped.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.calendar.is_some() {
        calendar::handle_mouse(app, mouse);
    }
}
