//! Per-day task aggregation for the calendar grid and the day view.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::Task;

/// Indicator flags for one calendar day. Independent booleans; a day may
/// carry all three at once. Render order is fixed: overdue, completed,
/// pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayMarks {
    pub overdue: bool,
    pub completed: bool,
    pub pending: bool,
}

/// Tasks whose due date falls on `day`, in file order. Same-calendar-day
/// equality, not a range test; tasks with malformed due dates match
/// nothing.
pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_day() == Some(day)).collect()
}

/// True when the task is not completed and its due instant is strictly
/// before `now`.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.is_completed() && task.due_instant().is_some_and(|due| due < now)
}

/// Indicator flags for `day`, computed fresh from the task collection.
/// `now` is the evaluation instant, injected so overdue is testable.
pub fn day_marks(tasks: &[Task], day: NaiveDate, now: DateTime<Utc>) -> DayMarks {
    let mut marks = DayMarks::default();
    for task in tasks_due_on(tasks, day) {
        if is_overdue(task, now) {
            marks.overdue = true;
        }
        if task.is_completed() {
            marks.completed = true;
        }
        if task.is_pending() {
            marks.pending = true;
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cal;
    use crate::model::TaskStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_completed_only() {
        let tasks = vec![Task::new(
            "report",
            "2024-03-05T10:00:00Z",
            Some(TaskStatus::Completed),
        )];
        let marks = day_marks(&tasks, d(2024, 3, 5), at("2024-03-20T00:00:00Z"));
        assert_eq!(
            marks,
            DayMarks {
                overdue: false,
                completed: true,
                pending: false
            }
        );
    }

    #[test]
    fn test_past_in_progress_is_overdue_and_pending() {
        let tasks = vec![Task::new(
            "old",
            "2023-01-01",
            Some(TaskStatus::InProgress),
        )];
        let marks = day_marks(&tasks, d(2023, 1, 1), at("2023-06-01T00:00:00Z"));
        assert_eq!(
            marks,
            DayMarks {
                overdue: true,
                completed: false,
                pending: true
            }
        );
    }

    #[test]
    fn test_future_due_is_not_overdue() {
        let tasks = vec![Task::new("later", "2024-03-05T10:00:00Z", None)];
        let marks = day_marks(&tasks, d(2024, 3, 5), at("2024-03-05T09:59:59Z"));
        assert!(!marks.overdue);
        assert!(marks.pending);
    }

    #[test]
    fn test_all_three_marks_at_once() {
        let tasks = vec![
            Task::new("a", "2024-03-05T08:00:00Z", None),
            Task::new("b", "2024-03-05T09:00:00Z", Some(TaskStatus::Completed)),
        ];
        let marks = day_marks(&tasks, d(2024, 3, 5), at("2024-03-06T00:00:00Z"));
        assert_eq!(
            marks,
            DayMarks {
                overdue: true,
                completed: true,
                pending: true
            }
        );
    }

    #[test]
    fn test_unknown_status_counts_only_toward_overdue() {
        let tasks = vec![Task::new(
            "odd",
            "2024-03-05",
            Some(TaskStatus::Other("blocked".into())),
        )];
        let marks = day_marks(&tasks, d(2024, 3, 5), at("2024-04-01T00:00:00Z"));
        assert_eq!(
            marks,
            DayMarks {
                overdue: true,
                completed: false,
                pending: false
            }
        );
    }

    #[test]
    fn test_malformed_due_date_marks_nothing() {
        let tasks = vec![Task::new("bad", "not-a-date", Some(TaskStatus::Completed))];
        for day in cal::days_of_month(d(2024, 3, 1)) {
            assert_eq!(day_marks(&tasks, day, at("2024-03-15T00:00:00Z")), DayMarks::default());
        }
    }

    #[test]
    fn test_valid_task_lands_in_exactly_one_bucket() {
        let tasks = vec![Task::new("t", "2024-03-05T10:00:00Z", None)];
        let hits: Vec<NaiveDate> = cal::days_of_month(d(2024, 3, 1))
            .into_iter()
            .filter(|day| !tasks_due_on(&tasks, *day).is_empty())
            .collect();
        assert_eq!(hits, vec![d(2024, 3, 5)]);
    }

    #[test]
    fn test_same_day_not_a_range_test() {
        let tasks = vec![Task::new("t", "2024-03-05T23:59:59Z", None)];
        assert!(tasks_due_on(&tasks, d(2024, 3, 4)).is_empty());
        assert_eq!(tasks_due_on(&tasks, d(2024, 3, 5)).len(), 1);
        assert!(tasks_due_on(&tasks, d(2024, 3, 6)).is_empty());
    }

    #[test]
    fn test_marks_are_pure() {
        let tasks = vec![
            Task::new("a", "2024-03-05T08:00:00Z", None),
            Task::new("b", "2024-03-05", Some(TaskStatus::Completed)),
        ];
        let now = at("2024-03-10T00:00:00Z");
        let first = day_marks(&tasks, d(2024, 3, 5), now);
        let second = day_marks(&tasks, d(2024, 3, 5), now);
        assert_eq!(first, second);
    }
}
