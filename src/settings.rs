//! Shared settings for the CLI and GUI.
//! Persisted in the platform-specific config directory via `directories::ProjectDirs`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::measure::{clamp_box_width, DEFAULT_BOX_WIDTH_PX};

/// Application settings that can be saved and loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Language code ("ko" or "en")
    pub lang: String,
    /// Last confirmed calibration box width in pixels
    pub box_width_px: f64,
    /// External command used to grab a camera still
    pub capture_command: String,
    /// Arguments passed to the capture command
    pub capture_args: Vec<String>,
    /// Preferred delivery day of month (1-28)
    pub delivery_day: u8,
    /// Active subscription unlocks subscriber-only answers
    pub subscribed: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            lang: "ko".to_string(),
            box_width_px: DEFAULT_BOX_WIDTH_PX,
            capture_command: "ffmpeg".to_string(),
            capture_args: vec![
                "-f".to_string(),
                "v4l2".to_string(),
                "-i".to_string(),
                "/dev/video0".to_string(),
                "-frames:v".to_string(),
                "1".to_string(),
                "-f".to_string(),
                "image2pipe".to_string(),
                "-vcodec".to_string(),
                "png".to_string(),
                "-".to_string(),
            ],
            delivery_day: 5,
            subscribed: false,
        }
    }
}

impl AppSettings {
    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "brushfit", "brushfit")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path.
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from the config file.
    pub fn load() -> Self {
        let defaults = Self::default();

        let mut loaded: Self = Self::settings_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        // Backfill new fields when loading older config files
        if loaded.lang.is_empty() {
            loaded.lang = defaults.lang;
        }
        if loaded.capture_command.is_empty() {
            loaded.capture_command = defaults.capture_command;
            loaded.capture_args = defaults.capture_args;
        }
        if loaded.delivery_day == 0 {
            loaded.delivery_day = defaults.delivery_day;
        }
        loaded.box_width_px = clamp_box_width(loaded.box_width_px);

        loaded
    }

    /// Save settings to the config file.
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir().ok_or("Cannot determine config directory")?;

        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let path = dir.join("settings.json");
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// Get logs directory path.
    pub fn logs_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "brushfit", "brushfit")
            .map(|dirs| dirs.data_dir().join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.lang, "ko");
        assert_eq!(settings.box_width_px, DEFAULT_BOX_WIDTH_PX);
        assert_eq!(settings.delivery_day, 5);
        assert!(!settings.subscribed);
    }

    #[test]
    fn test_roundtrip_json() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.capture_command, settings.capture_command);
        assert_eq!(back.box_width_px, settings.box_width_px);
    }

    #[test]
    fn test_partial_json_backfills() {
        let back: AppSettings = serde_json::from_str(r#"{"lang":"en"}"#).unwrap();
        assert_eq!(back.lang, "en");
        assert_eq!(back.box_width_px, DEFAULT_BOX_WIDTH_PX);
        assert_eq!(back.capture_command, "ffmpeg");
    }
}
