//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::PLACEHOLDER_COVER_URL;
use crate::model::TrackId;

/// How loose files are paired with an audio file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// File name starts with the audio base name (`track1.lrc` also matches `track10.mp3`)
    #[default]
    Prefix,
    /// Base names must be equal
    Exact,
}

impl MatchMode {
    /// Whether `file_name` belongs to the audio file with `base_name`
    pub fn matches(self, file_name: &str, base_name: &str) -> bool {
        match self {
            MatchMode::Prefix => file_name.starts_with(base_name),
            MatchMode::Exact => crate::features::import::base_name(file_name) == base_name,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Prefix => write!(f, "prefix"),
            MatchMode::Exact => write!(f, "exact"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Folder import settings
    #[serde(default)]
    pub import: ImportSettings,
    /// AI DJ settings
    #[serde(default)]
    pub dj: DjSettings,
    /// Playback settings
    #[serde(default)]
    pub playback: PlaybackSettings,
}

/// Folder import settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Extensions treated as audio even without an `audio/*` MIME hint
    pub audio_extensions: Vec<String>,
    /// Cover used when the folder has no cover/folder image
    pub fallback_cover_url: String,
    /// Artist shown for imported tracks
    pub placeholder_artist: String,
    /// Album shown for imported tracks
    pub placeholder_album: String,
    /// First track ID handed out by an import
    pub id_offset: TrackId,
    /// Cover and lyrics pairing rule
    pub match_mode: MatchMode,
}

/// AI DJ settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DjSettings {
    /// Ask the model for an intro on every track change
    pub enabled: bool,
    /// API key; `API_KEY` / `GEMINI_API_KEY` are used when unset
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Playback-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume level (0.0 to 1.0)
    pub volume: f32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            audio_extensions: crate::features::import::AUDIO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            fallback_cover_url: PLACEHOLDER_COVER_URL.to_string(),
            placeholder_artist: "Local Upload".to_string(),
            placeholder_album: "My Folder".to_string(),
            id_offset: 100,
            match_mode: MatchMode::Prefix,
        }
    }
}

impl Default for DjSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { volume: 0.8 }
    }
}

impl DjSettings {
    /// Configured key, or the one from the environment
    pub fn resolved_api_key(&self) -> Option<String> {
        let usable = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(usable)
            .or_else(|| std::env::var("API_KEY").ok().filter(usable))
            .or_else(|| std::env::var("GEMINI_API_KEY").ok().filter(usable))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "turntable", "Turntable")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
