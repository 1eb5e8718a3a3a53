use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from tada.toml. Everything is optional; a missing file
/// means a default of everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Background rain animation
    #[serde(default = "default_true")]
    pub rain: bool,
    /// Key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides from [ui.colors], as "#RRGGBB" strings
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            rain: true,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
