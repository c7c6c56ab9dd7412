use log::{info, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

use super::device::PlaybackDevice;

/// Where the single playback slot currently stands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    /// `index` is the catalog position at the moment playback started.
    Playing { index: usize },
}

/// What a successful play command reports back for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NowPlaying {
    pub index: usize,
    pub artist: String,
    pub title: String,
}

/// Gates play/stop commands so at most one track plays at a time.
///
/// There is one controller per session and it is handed to whoever needs
/// it; nothing about playback lives in global state.
pub struct PlaybackController<D: PlaybackDevice> {
    device: D,
    state: PlaybackState,
}

impl<D: PlaybackDevice> PlaybackController<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    #[cfg(test)]
    pub(crate) fn device(&self) -> &D {
        &self.device
    }

    /// Play the track at `index`, bumping its play count.
    ///
    /// Fails with `AlreadyPlaying` while another track is active and with
    /// `IndexOutOfRange` for a bad index; neither touches the device.
    pub fn play_at(&mut self, catalog: &mut Catalog, index: usize) -> Result<NowPlaying> {
        if self.is_playing() {
            warn!("rejected play of {index}: already playing");
            return Err(Error::AlreadyPlaying);
        }

        let track = catalog.get_mut(index)?;
        self.device.start(track.filename());
        track.increment_play_count();
        self.state = PlaybackState::Playing { index };

        let now = NowPlaying {
            index,
            artist: track.artist().to_string(),
            title: track.title().to_string(),
        };
        info!("now playing: {} - {}", now.artist, now.title);
        Ok(now)
    }

    /// Play the first track. An empty catalog is a silent no-op.
    pub fn play_first(&mut self, catalog: &mut Catalog) -> Result<Option<NowPlaying>> {
        if self.is_playing() {
            warn!("rejected play of first track: already playing");
            return Err(Error::AlreadyPlaying);
        }
        if catalog.is_empty() {
            return Ok(None);
        }
        self.play_at(catalog, 0).map(Some)
    }

    /// Stop playback. The device is told to stop even when idle.
    pub fn stop(&mut self) {
        self.device.stop();
        if self.is_playing() {
            info!("playback stopped");
        }
        self.state = PlaybackState::Idle;
    }
}
