use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::cli::commands::ListArgs;
use crate::io::data_io;
use crate::model::Task;
use crate::ops::day_marks::is_overdue;

/// Resolve the data directory: explicit --dir, else discover upward from
/// the working directory.
pub fn resolve_data_dir(dir: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir {
        Some(d) => Ok(d.to_path_buf()),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(data_io::discover_data_dir(&cwd)?)
        }
    }
}

pub fn cmd_init(dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let root = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let created = data_io::init_data_dir(&root)?;
    println!("initialized {}", created.display());
    Ok(())
}

pub fn cmd_list(dir: Option<&Path>, args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(dir)?;
    let config = data_io::load_config(&data_dir)?;
    let tasks = data_io::load_tasks(&data_io::tasks_path(&data_dir, &config))?;

    let find = match &args.find {
        Some(pattern) => Some(Regex::new(pattern)?),
        None => None,
    };
    let now = Utc::now();

    for task in &tasks {
        if let Some(day) = args.on
            && task.due_day() != Some(day)
        {
            continue;
        }
        if let Some(re) = &find
            && !re.is_match(&task.title)
        {
            continue;
        }
        println!("{}", format_task_line(task, now));
    }
    Ok(())
}

/// One listing line: checkbox, due day, overdue marker, title.
fn format_task_line(task: &Task, now: DateTime<Utc>) -> String {
    let due = match task.due_day() {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "(invalid date)".to_string(),
    };
    let mark = if is_overdue(task, now) { " !" } else { "" };
    format!("[{}] {}{}  {}", task.checkbox_char(), due, mark, task.title)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::TaskStatus;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_task_line() {
        let now = at("2024-06-01T00:00:00Z");
        let done = Task::new("Ship it", "2024-03-05", Some(TaskStatus::Completed));
        assert_eq!(format_task_line(&done, now), "[x] 2024-03-05  Ship it");

        let late = Task::new("Oops", "2024-03-05", None);
        assert_eq!(format_task_line(&late, now), "[ ] 2024-03-05 !  Oops");

        let bad = Task::new("Bad", "whenever", Some(TaskStatus::InProgress));
        assert_eq!(format_task_line(&bad, now), "[>] (invalid date)  Bad");
    }
}
