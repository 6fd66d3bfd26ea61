use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, Utc};

use crate::model::{Config, Task, TaskStatus};

/// Error type for data-directory IO.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("not a taskcal directory: no taskcal/ directory with a config.toml found")]
    NotFound,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    TasksParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },
}

pub const DATA_DIR: &str = "taskcal";
pub const CONFIG_FILE: &str = "config.toml";

const CONFIG_TEMPLATE: &str = r##"[data]
tasks = "tasks.json"

[ui]
show_key_hints = true

# Hex overrides for any theme color, e.g.
# [ui.colors]
# highlight = "#4FC1FF"
# red = "#FF5F56"
"##;

/// Walk up from `start` looking for a `taskcal/` directory containing a
/// `config.toml`.
pub fn discover_data_dir(start: &Path) -> Result<PathBuf, DataError> {
    let mut current = start.to_path_buf();
    loop {
        let dir = current.join(DATA_DIR);
        if dir.is_dir() && dir.join(CONFIG_FILE).exists() {
            return Ok(dir);
        }
        if !current.pop() {
            return Err(DataError::NotFound);
        }
    }
}

/// Read and parse `config.toml` from the data directory.
pub fn load_config(data_dir: &Path) -> Result<Config, DataError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = fs::read_to_string(&path).map_err(|e| DataError::Read {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| DataError::ConfigParse { path, source: e })
}

/// Absolute path of the tasks file named by the config.
pub fn tasks_path(data_dir: &Path, config: &Config) -> PathBuf {
    data_dir.join(&config.data.tasks)
}

/// Load the task list. The file is externally owned; an absent file is an
/// empty list, so a fresh directory renders an empty calendar.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, DataError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| DataError::TasksParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scaffold `taskcal/` under `root` with a default config and a small
/// sample task list around today. Refuses to overwrite an existing
/// config.
pub fn init_data_dir(root: &Path) -> Result<PathBuf, DataError> {
    let dir = root.join(DATA_DIR);
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        return Err(DataError::AlreadyExists { path: config_path });
    }
    fs::create_dir_all(&dir).map_err(|e| DataError::Write {
        path: dir.clone(),
        source: e,
    })?;
    fs::write(&config_path, CONFIG_TEMPLATE).map_err(|e| DataError::Write {
        path: config_path,
        source: e,
    })?;

    let tasks_path = dir.join("tasks.json");
    let text = serde_json::to_string_pretty(&sample_tasks()).map_err(|e| DataError::TasksParse {
        path: tasks_path.clone(),
        source: e,
    })?;
    fs::write(&tasks_path, text).map_err(|e| DataError::Write {
        path: tasks_path,
        source: e,
    })?;
    Ok(dir)
}

fn sample_tasks() -> Vec<Task> {
    let today = Utc::now().date_naive();
    let day = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
    let morning = |d: chrono::NaiveDate| format!("{}T09:00:00Z", d.format("%Y-%m-%d"));
    vec![
        Task::new(
            "Review the quarterly report",
            day(today),
            Some(TaskStatus::InProgress),
        ),
        Task::new(
            "Send the March invoice",
            day(today.checked_sub_days(Days::new(3)).unwrap_or(today)),
            None,
        ),
        Task::new(
            "Book flights",
            morning(today.checked_add_days(Days::new(9)).unwrap_or(today)),
            Some(TaskStatus::Completed),
        ),
    ]
}
