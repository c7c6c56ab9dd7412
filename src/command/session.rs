use crate::catalog::Catalog;
use crate::config::DisplaySettings;
use crate::error::{Error, Result};
use crate::library::{Track, details_from_fields};
use crate::playback::{PlaybackController, PlaybackDevice, PlaybackState};

use super::parse::{Command, HELP};

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and keep going.
    Lines(Vec<String>),
    Quit,
}

/// The catalog and the playback controller for one interactive run.
pub struct Session<D: PlaybackDevice> {
    pub catalog: Catalog,
    pub player: PlaybackController<D>,
    display: DisplaySettings,
}

fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(Error::IndexOutOfRange { index, len })
}

impl<D: PlaybackDevice> Session<D> {
    pub fn new(catalog: Catalog, player: PlaybackController<D>, display: DisplaySettings) -> Self {
        Self {
            catalog,
            player,
            display,
        }
    }

    fn details(&self, track: &Track) -> String {
        details_from_fields(track, &self.display.fields, &self.display.separator)
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome> {
        let lines = match cmd {
            Command::Add(path) => {
                let line = format!("Added {}", path.display());
                self.catalog.add_file(path);
                vec![line]
            }
            Command::List => {
                let mut lines = vec!["Track listing:".to_string()];
                lines.extend(
                    self.catalog
                        .list()
                        .map(|(i, t)| format!("{i}: {}", self.details(t))),
                );
                lines
            }
            Command::Show(index) => {
                let i = checked_index(index, self.catalog.len())?;
                let track = self.catalog.get(i)?;
                vec![format!("Track {i}: {}", self.details(track))]
            }
            Command::FindArtist(needle) => self
                .catalog
                .find_by_artist(&needle)
                .map(|t| self.details(t))
                .collect(),
            Command::FindTitle(needle) => self
                .catalog
                .find_by_title(&needle)
                .map(|t| self.details(t))
                .collect(),
            Command::Remove(index) => {
                let i = checked_index(index, self.catalog.len())?;
                let removed = self.catalog.remove_at(i)?;
                vec![format!("Removed {}", self.details(&removed))]
            }
            Command::RemoveArtist(needle) => {
                let n = self.catalog.remove_by_artist(&needle);
                vec![format!("Removed {n} tracks")]
            }
            Command::SetAlbum(index, album) => {
                // Out-of-range (negative included) is ignored without a word.
                if let Ok(i) = usize::try_from(index) {
                    self.catalog.set_album(i, album);
                }
                Vec::new()
            }
            Command::Play(index) => {
                // A busy player wins over a bad index.
                let i = checked_index(index, self.catalog.len()).map_err(|e| {
                    if self.player.is_playing() {
                        Error::AlreadyPlaying
                    } else {
                        e
                    }
                })?;
                let now = self.player.play_at(&mut self.catalog, i)?;
                vec![format!("Now playing: {} - {}", now.artist, now.title)]
            }
            Command::PlayFirst => match self.player.play_first(&mut self.catalog)? {
                Some(now) => vec![format!("Now playing: {} - {}", now.artist, now.title)],
                None => Vec::new(),
            },
            Command::Stop => {
                self.player.stop();
                Vec::new()
            }
            // The index recorded at play time goes stale once earlier tracks
            // are removed, so it is not shown here.
            Command::Status => match self.player.state() {
                PlaybackState::Playing { .. } => vec!["A track is playing right now.".to_string()],
                PlaybackState::Idle => vec!["Nothing is playing.".to_string()],
            },
            Command::Count => vec![format!("{} tracks", self.catalog.len())],
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Lines(lines))
    }
}
