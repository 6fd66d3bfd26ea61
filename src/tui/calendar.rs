use chrono::{Duration, NaiveDate};
use ratatui::layout::{Position, Rect};

use crate::cal;

use super::capture::MouseCaptureGuard;

/// Outbound signal from the calendar popup to the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOutcome {
    /// The user picked a date. The shell applies the selection, then
    /// closes the popup.
    Picked(NaiveDate),
    /// The user dismissed the popup without picking.
    Dismissed,
}

/// State of the open month calendar popup.
///
/// Exists only while open; closing drops it (and with it the mouse
/// capture guard), so reopening reseeds from the selected date.
#[derive(Debug)]
pub struct CalendarPopup {
    /// Keyboard focus within the grid. The displayed month is always the
    /// month containing this date.
    pub cursor: NaiveDate,
    /// Terminal mouse capture, held for exactly as long as the popup is
    /// open. `None` under test.
    _capture: Option<MouseCaptureGuard>,
    /// Hit regions recorded by the renderer each frame.
    pub area: Rect,
    pub prev_area: Rect,
    pub next_area: Rect,
    pub day_areas: Vec<(NaiveDate, Rect)>,
}

impl CalendarPopup {
    /// A popup seeded on the selected date. Does not touch the terminal;
    /// the shell decides whether to attach mouse capture.
    pub fn new(selected: NaiveDate) -> Self {
        CalendarPopup {
            cursor: selected,
            _capture: None,
            area: Rect::default(),
            prev_area: Rect::default(),
            next_area: Rect::default(),
            day_areas: Vec::new(),
        }
    }

    /// Attach terminal mouse capture. A no-op when already held, so the
    /// subscription can never double-register.
    pub fn enable_capture(&mut self) {
        if self._capture.is_none() {
            self._capture = Some(MouseCaptureGuard::acquire());
        }
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        cal::month_start(self.cursor)
    }

    /// Shift the displayed month forward by one, keeping the cursor's
    /// day-of-month clamped to the target month. Never closes the popup
    /// and never touches the selected date.
    pub fn next_month(&mut self) {
        self.cursor = cal::next_month(self.cursor);
    }

    /// Shift the displayed month back by one, with the same clamping.
    pub fn prev_month(&mut self) {
        self.cursor = cal::prev_month(self.cursor);
    }

    /// Move the keyboard cursor by whole days; the displayed month
    /// follows the cursor across month boundaries.
    pub fn move_cursor(&mut self, days: i64) {
        if let Some(d) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = d;
        }
    }

    /// The day cell containing the given terminal position, if any.
    pub fn day_at(&self, pos: Position) -> Option<NaiveDate> {
        self.day_areas
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(date, _)| *date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_seeded_from_selected_date() {
        let popup = CalendarPopup::new(d(2024, 3, 17));
        assert_eq!(popup.cursor, d(2024, 3, 17));
        assert_eq!(popup.month(), d(2024, 3, 1));
    }

    #[test]
    fn test_month_navigation_shifts_exactly_one_month() {
        let mut popup = CalendarPopup::new(d(2024, 3, 17));
        popup.next_month();
        assert_eq!(popup.month(), d(2024, 4, 1));
        popup.prev_month();
        popup.prev_month();
        assert_eq!(popup.month(), d(2024, 2, 1));
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        let mut popup = CalendarPopup::new(d(2024, 1, 31));
        popup.next_month();
        assert_eq!(popup.cursor, d(2024, 2, 29));
        popup.next_month();
        assert_eq!(popup.cursor, d(2024, 3, 29));
    }

    #[test]
    fn test_cursor_crosses_month_boundary() {
        let mut popup = CalendarPopup::new(d(2024, 3, 31));
        popup.move_cursor(1);
        assert_eq!(popup.cursor, d(2024, 4, 1));
        assert_eq!(popup.month(), d(2024, 4, 1));
        popup.move_cursor(-7);
        assert_eq!(popup.cursor, d(2024, 3, 25));
    }

    #[test]
    fn test_day_at_uses_recorded_areas() {
        let mut popup = CalendarPopup::new(d(2024, 3, 1));
        popup.day_areas = vec![
            (d(2024, 3, 1), Rect::new(10, 5, 6, 1)),
            (d(2024, 3, 2), Rect::new(17, 5, 6, 1)),
        ];
        assert_eq!(popup.day_at(Position::new(12, 5)), Some(d(2024, 3, 1)));
        assert_eq!(popup.day_at(Position::new(17, 5)), Some(d(2024, 3, 2)));
        assert_eq!(popup.day_at(Position::new(40, 5)), None);
    }
}
