use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use crate::playback::PlaybackDevice;

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// Plays files through the default output device on a background thread.
pub struct RodioDevice {
    tx: Sender<AudioCmd>,
    join: Option<JoinHandle<()>>,
}

impl RodioDevice {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let join = spawn_audio_thread(rx);
        Self {
            tx,
            join: Some(join),
        }
    }

    /// Stop playback, end the audio thread and wait for it.
    pub fn shutdown(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl PlaybackDevice for RodioDevice {
    fn start(&mut self, file: &Path) {
        let _ = self.tx.send(AudioCmd::Play(file.to_path_buf()));
    }

    fn stop(&mut self) {
        let _ = self.tx.send(AudioCmd::Stop);
    }
}

impl Drop for RodioDevice {
    fn drop(&mut self) {
        self.shutdown();
    }
}
