use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackshelf/config.toml` or `~/.config/trackshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line arguments
/// 2) Environment variables (prefix `TRACKSHELF__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub display: DisplaySettings,
    pub audio: AudioSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder imported at startup.
    pub folder: String,
    /// File extension to import (case-insensitive, leading dot optional).
    pub extension: String,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            folder: "audio".to_string(),
            extension: "mp3".to_string(),
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields make up a listing line, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub fields: Vec<TrackDisplayField>,
    /// Separator used to join `fields`.
    pub separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![
                TrackDisplayField::Artist,
                TrackDisplayField::Title,
                TrackDisplayField::Album,
                TrackDisplayField::Filename,
                TrackDisplayField::PlayCount,
            ],
            separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Artist,
    Title,
    Album,
    #[serde(alias = "file", alias = "path")]
    Filename,
    #[serde(alias = "play_count", alias = "plays")]
    PlayCount,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Drive a real output device. When false, playback commands only
    /// update state and log.
    pub enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogSettings {
    /// Parse `level`, falling back to `Info` for anything unrecognised.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.trim().parse().unwrap_or(log::LevelFilter::Info)
    }
}
