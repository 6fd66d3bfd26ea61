use ratatui::style::Color;

use crate::model::{TaskStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
    pub selection_bg: Color,
    pub today: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x18),
            text: Color::Rgb(0xC8, 0xD3, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4F, 0xC1, 0xFF),
            dim: Color::Rgb(0x5F, 0x6B, 0x76),
            red: Color::Rgb(0xFF, 0x5F, 0x56),
            green: Color::Rgb(0x27, 0xC9, 0x3F),
            blue: Color::Rgb(0x4F, 0x8F, 0xFF),
            yellow: Color::Rgb(0xFF, 0xBD, 0x2E),
            selection_bg: Color::Rgb(0x1E, 0x43, 0x5C),
            today: Color::Rgb(0x7F, 0xDB, 0xFF),
        }
    }
}

/// Parse a hex color string like "#FF5F56" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from `[ui.colors]`, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "green" => theme.green = color,
                    "blue" => theme.blue = color,
                    "yellow" => theme.yellow = color,
                    "selection_bg" => theme.selection_bg = color,
                    "today" => theme.today = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Color for a task's status in the day view.
    pub fn status_color(&self, status: Option<&TaskStatus>) -> Color {
        match status {
            Some(TaskStatus::Completed) => self.green,
            Some(TaskStatus::InProgress) => self.blue,
            Some(TaskStatus::Other(_)) => self.yellow,
            None => self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF5F56"), Some(Color::Rgb(0xFF, 0x5F, 0x56)));
        assert_eq!(parse_hex_color("FF5F56"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut colors = HashMap::new();
        colors.insert("red".to_string(), "#AA0000".to_string());
        colors.insert("bogus".to_string(), "#112233".to_string());
        let ui = UiConfig {
            colors,
            ..UiConfig::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.red, Color::Rgb(0xAA, 0x00, 0x00));
        assert_eq!(theme.blue, Theme::default().blue);
    }
}
