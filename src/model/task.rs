use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task, as written in the external tasks file.
///
/// Anything other than the two known strings is carried through as
/// `Other`: neither completed nor pending, but still eligible for the
/// overdue indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Completed,
    InProgress,
    #[serde(untagged)]
    Other(String),
}

/// A task from the external tasks file. The file is owned by the user;
/// taskcal reads it and never writes a task back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    /// Due date exactly as written: an ISO-8601 datetime or bare date.
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Absent means not started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        due_date: impl Into<String>,
        status: Option<TaskStatus>,
    ) -> Self {
        Task {
            title: title.into(),
            due_date: due_date.into(),
            status,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, Some(TaskStatus::Completed))
    }

    /// No status and in-progress are equivalent: both count as pending.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, None | Some(TaskStatus::InProgress))
    }

    /// Parse `due_date` as an instant in UTC. Accepts RFC 3339, a bare
    /// datetime (read as UTC), or a bare date (midnight UTC). Returns
    /// `None` for anything else; a malformed date excludes the task from
    /// every day bucket instead of failing a render.
    pub fn due_instant(&self) -> Option<DateTime<Utc>> {
        let s = self.due_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt.and_utc());
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            && let Some(dt) = d.and_hms_opt(0, 0, 0)
        {
            return Some(dt.and_utc());
        }
        None
    }

    /// The calendar day the task is due, ignoring time-of-day.
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_instant().map(|dt| dt.date_naive())
    }

    /// The character used inside the day view checkbox `[ ]`.
    pub fn checkbox_char(&self) -> char {
        match &self.status {
            Some(TaskStatus::Completed) => 'x',
            Some(TaskStatus::InProgress) => '>',
            Some(TaskStatus::Other(_)) => '-',
            None => ' ',
        }
    }
}
