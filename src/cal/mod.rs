//! Calendar arithmetic over `chrono::NaiveDate`.
//!
//! Month boundaries are calendar-correct (varying month lengths, leap
//! years); month shifts preserve the day-of-month where it exists in the
//! target month and clamp to the month end otherwise.

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(start)
}

/// Every day of the month containing `date`, first to last, ascending.
/// Recomputed per call; never cached.
pub fn days_of_month(date: NaiveDate) -> Vec<NaiveDate> {
    let start = month_start(date);
    start
        .iter_days()
        .take_while(|d| d.month() == start.month() && d.year() == start.year())
        .collect()
}

/// One calendar month later, clamped (Jan 31 -> Feb 28/29).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// One calendar month earlier, clamped (Mar 31 -> Feb 28/29).
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(month_start(d(2024, 3, 17)), d(2024, 3, 1));
        assert_eq!(month_end(d(2024, 3, 17)), d(2024, 3, 31));
        assert_eq!(month_end(d(2024, 2, 1)), d(2024, 2, 29)); // leap year
        assert_eq!(month_end(d(2023, 2, 1)), d(2023, 2, 28));
        assert_eq!(month_end(d(2024, 4, 30)), d(2024, 4, 30));
    }

    #[test]
    fn test_days_of_month_lengths() {
        assert_eq!(days_of_month(d(2024, 1, 15)).len(), 31);
        assert_eq!(days_of_month(d(2024, 2, 15)).len(), 29);
        assert_eq!(days_of_month(d(2023, 2, 15)).len(), 28);
        assert_eq!(days_of_month(d(2024, 4, 15)).len(), 30);
    }

    #[test]
    fn test_days_of_month_span_and_order() {
        // Full span, ascending, no gaps or duplicates, for every month of
        // a leap and a non-leap year.
        for year in [2023, 2024] {
            for month in 1..=12 {
                let days = days_of_month(d(year, month, 1));
                assert_eq!(days.first().copied(), Some(d(year, month, 1)));
                assert_eq!(days.last().copied(), Some(month_end(d(year, month, 1))));
                for pair in days.windows(2) {
                    assert_eq!(pair[1], pair[0].succ_opt().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_month_shift_preserves_day() {
        assert_eq!(next_month(d(2024, 3, 17)), d(2024, 4, 17));
        assert_eq!(prev_month(d(2024, 3, 17)), d(2024, 2, 17));
    }

    #[test]
    fn test_month_shift_clamps_to_month_end() {
        assert_eq!(next_month(d(2024, 1, 31)), d(2024, 2, 29));
        assert_eq!(next_month(d(2023, 1, 31)), d(2023, 2, 28));
        assert_eq!(prev_month(d(2024, 3, 31)), d(2024, 2, 29));
        assert_eq!(next_month(d(2024, 12, 31)), d(2025, 1, 31));
    }
}
