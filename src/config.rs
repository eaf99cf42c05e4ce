//! Persisted viewer settings (last selection, optional local CSV path).

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PLAYER: &str = "Skenes, Paul";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_player: String,
    pub last_season: Option<i32>,
    /// Local CSV override; when unset the cached download is used.
    pub csv_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_player: DEFAULT_PLAYER.to_string(),
            last_season: None,
            csv_path: None,
        }
    }
}

impl Settings {
    fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tunnelview").map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load saved settings, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings file: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Best-effort save; failures are logged, not fatal.
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("Could not save settings: {e}");
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_default_player() {
        let settings = Settings::default();
        assert_eq!(settings.last_player, "Skenes, Paul");
        assert_eq!(settings.last_season, None);
        assert_eq!(settings.csv_path, None);
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let settings = Settings {
            last_player: "Webb, Logan".to_string(),
            last_season: Some(2024),
            csv_path: Some(PathBuf::from("/tmp/tunnel_data.csv")),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_player, settings.last_player);
        assert_eq!(back.last_season, settings.last_season);
        assert_eq!(back.csv_path, settings.csv_path);
    }

    #[test]
    fn unknown_or_missing_fields_fall_back_to_defaults() {
        let back: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.last_player, "Skenes, Paul");
    }
}
