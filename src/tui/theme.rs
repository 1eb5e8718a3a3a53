use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub rain: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x13, 0x10, 0x24),
            text: Color::Rgb(0xC5, 0xBF, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xC0, 0x84, 0xFC),
            dim: Color::Rgb(0x6E, 0x67, 0x9C),
            green: Color::Rgb(0x4A, 0xDE, 0x80),
            red: Color::Rgb(0xF8, 0x71, 0x71),
            selection_bg: Color::Rgb(0x2A, 0x22, 0x4A),
            rain: Color::Rgb(0x41, 0x3A, 0x6B),
        }
    }
}

/// Parse a hex color string like "#C084FC" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    // get() rather than slicing: a multibyte char in the value must read
    // as malformed, not panic on a non-boundary index
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    "rain" => theme.rain = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
