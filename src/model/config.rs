use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use super::variant::Variant;

/// Configuration from todo.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub variant: Variant,
    /// How long the undo toast stays up after a delete
    #[serde(default = "default_undo_timeout_ms")]
    pub undo_timeout_ms: u64,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::default(),
            undo_timeout_ms: default_undo_timeout_ms(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn default_undo_timeout_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `highlight = "#FB4196"`
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

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Log destination. Nothing is logged when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default)]
    pub filter: Option<String>,
}
