use crate::model::confetti::DEFAULT_PIECE_COUNT;
use crate::model::overlay::DEFAULT_OVERLAY_DURATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event polling interval; also the animation frame interval
    pub tick_rate_ms: u64,
    /// How long the confetti overlay stays up after a trigger
    pub overlay_duration_ms: u64,
    /// Delay before the start-up confetti burst
    pub intro_confetti_delay_ms: u64,
    pub confetti_pieces: usize,
    /// YAML content file; built-in content when unset
    pub content_path: Option<String>,
    /// Directory that web-style asset paths (`/photos/...`) resolve against
    pub asset_root: Option<String>,
    /// Command used to open photos and videos
    pub media_player: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            overlay_duration_ms: DEFAULT_OVERLAY_DURATION.as_millis() as u64,
            intro_confetti_delay_ms: 1500,
            confetti_pieces: DEFAULT_PIECE_COUNT,
            content_path: None,
            asset_root: None,
            media_player: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".birthday-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from the default location
    pub fn load() -> Config {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load a config file, falling back to defaults when it is missing or invalid
    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Config::default()
            }
        }
    }

    /// Save the config to disk
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn overlay_duration(&self) -> Duration {
        Duration::from_millis(self.overlay_duration_ms)
    }

    pub fn intro_confetti_delay(&self) -> Duration {
        Duration::from_millis(self.intro_confetti_delay_ms)
    }
}
