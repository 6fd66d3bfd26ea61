use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskcal/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Tasks file, relative to the taskcal/ directory.
    #[serde(default = "default_tasks_file")]
    pub tasks: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            tasks: default_tasks_file(),
        }
    }
}

fn default_tasks_file() -> String {
    "tasks.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides, keyed by theme field name.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.data.tasks, "tasks.json");
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r##"
[data]
tasks = "work.json"

[ui.colors]
highlight = "#FF00FF"
"##,
        )
        .unwrap();
        assert_eq!(config.data.tasks, "work.json");
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF00FF");
    }
}
