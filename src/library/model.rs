use std::path::{Path, PathBuf};

/// Placeholder used when neither tags nor the filename give us a value.
pub const UNKNOWN: &str = "unknown";

/// One media item: metadata plus how many times it has been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    filename: PathBuf,
    artist: String,
    title: String,
    album: String,
    play_count: u32,
}

impl Track {
    pub fn new(
        filename: impl Into<PathBuf>,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            artist: artist.into(),
            title: title.into(),
            album: String::new(),
            play_count: 0,
        }
    }

    /// A track for a bare file with no known artist or title.
    pub fn from_file(filename: impl Into<PathBuf>) -> Self {
        Self::new(filename, UNKNOWN, UNKNOWN)
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn set_album(&mut self, album: impl Into<String>) {
        self.album = album.into();
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Only the playback controller calls this, once per successful play.
    pub(crate) fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }
}
