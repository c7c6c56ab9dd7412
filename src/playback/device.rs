use std::path::Path;

use log::info;

/// Something that can actually make noise.
///
/// Both calls are fire-and-forget: they return as soon as the request has
/// been handed off and never report whether playback really happened.
pub trait PlaybackDevice {
    /// Begin playing `file`, replacing whatever the device was doing.
    fn start(&mut self, file: &Path);
    /// Stop playback. Safe to call when nothing is playing.
    fn stop(&mut self);
}

impl<D: PlaybackDevice + ?Sized> PlaybackDevice for Box<D> {
    fn start(&mut self, file: &Path) {
        (**self).start(file);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// Device used when audio output is disabled; it only logs.
#[derive(Debug, Default)]
pub struct SilentDevice;

impl PlaybackDevice for SilentDevice {
    fn start(&mut self, file: &Path) {
        info!("(silent) start {}", file.display());
    }

    fn stop(&mut self) {
        info!("(silent) stop");
    }
}
