use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Command-line arguments. Anything given here beats the config file.
#[derive(Parser, Debug)]
#[command(name = "trackshelf")]
#[command(about = "Organize a folder of music and play one track at a time")]
#[command(version)]
pub struct Args {
    /// Folder to import tracks from
    pub folder: Option<PathBuf>,

    /// File extension to import, e.g. "mp3" or ".flac"
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Never open an audio device
    #[arg(long)]
    pub no_audio: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(folder) = &self.folder {
            settings.library.folder = folder.display().to_string();
        }
        if let Some(ext) = &self.extension {
            settings.library.extension = ext.clone();
        }
        if self.no_audio {
            settings.audio.enabled = false;
        }
    }
}
