/// Configuration module for the Edgebar application.
///
/// Settings are persisted as a flat JSON object in `config.json` inside the
/// platform-specific application data directory. Loading never fails: a
/// missing, unreadable or corrupt file yields the built-in defaults, and a
/// partial file is back-filled key by key (one-level merge). Keys this
/// version does not know about are carried along untouched so an older
/// build never strips a newer build's settings.
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

pub const CONFIG_FILE: &str = "config.json";
pub const SHORTCUTS_FILE: &str = "shortcuts.json";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("", "", "Edgebar"));

/// Screen edge the panel is pinned to and expands away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_side")]
    pub side: Side,
    /// Panel background as `#RRGGBB`.
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width_collapsed")]
    pub width_collapsed: u32,
    #[serde(default = "default_width_expanded")]
    pub width_expanded: u32,
    #[serde(default = "default_show_tray")]
    pub show_tray: bool,
    /// Unknown keys ride along so a save never drops them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_side() -> Side {
    Side::Right
}

fn default_color() -> String {
    "#4B2E2A".to_string()
}

fn default_width_collapsed() -> u32 {
    16
}

fn default_width_expanded() -> u32 {
    200
}

fn default_show_tray() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            side: default_side(),
            color: default_color(),
            width_collapsed: default_width_collapsed(),
            width_expanded: default_width_expanded(),
            show_tray: default_show_tray(),
            extra: Map::new(),
        }
    }
}

/// Get the application's data directory, creating it if needed.
pub fn data_directory() -> StoreResult<PathBuf> {
    let dirs = PROJECT_DIRS
        .as_ref()
        .ok_or(StoreError::MissingDataDirectory)?;
    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.to_path_buf())
}

fn config_path() -> StoreResult<PathBuf> {
    Ok(data_directory()?.join(CONFIG_FILE))
}

/// Load the configuration from `config.json`.
/// Returns the defaults if the file is missing or unusable.
pub fn load_config() -> AppConfig {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(err) => {
            tracing::warn!(%err, "no data directory; using default config");
            AppConfig::default()
        }
    }
}

/// Load the configuration from an explicit path.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(%err, ?path, "failed to read config; using defaults");
            return AppConfig::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(%err, ?path, "failed to parse config; using defaults");
        AppConfig::default()
    })
}

/// Save the full configuration record to `config.json`.
pub fn save_config(config: &AppConfig) -> StoreResult<()> {
    save_config_to(&config_path()?, config)
}

/// Save the configuration to an explicit path as indented UTF-8 JSON.
pub fn save_config_to(path: &Path, config: &AppConfig) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
